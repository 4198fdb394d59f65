use std::io;

use thiserror::Error;

use crate::vector::Field;

/// Problems turning one line of text back into a test vector.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected 4 space separated fields, found {0}")]
    FieldCount(usize),

    #[error("{field}: {source}")]
    Field {
        field: Field,
        #[source]
        source: Box<ParseError>,
    },

    #[error("invalid decimal {0:?}")]
    Decimal(String),

    #[error("addend must be in [1, 4294967295]")]
    ZeroAddend,

    #[error("hex value must be 64 digits, got {0}")]
    HexLength(usize),

    #[error("invalid hex digit {0:?}")]
    HexDigit(char),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl ParseError {
    pub(crate) fn in_field(self, field: Field) -> ParseError {
        ParseError::Field {
            field,
            source: Box::new(self),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{field} overflowed 256 bits (t0 = {t0}, addend = {addend})")]
    Overflow {
        field: Field,
        t0: String,
        addend: u32,
    },

    #[error("failed to write vectors")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: ParseError,
    },

    #[error("line {line}: {field} is {actual}, expected {expected}")]
    Mismatch {
        line: u64,
        field: Field,
        expected: String,
        actual: String,
    },

    #[error("line {line}: vector does not render back to its input")]
    NotCanonical { line: u64 },

    #[error("failed to read vectors")]
    Io(#[from] io::Error),
}
