//! One line of test data: `<addend> <t0> <t1> <t2>`.

use std::{fmt, str::FromStr};

use crate::{error::ParseError, u256::U256};

/// Names a column of the line format, for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Addend,
    T0,
    T1,
    T2,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Addend => "rand_u32",
            Field::T0 => "t0",
            Field::T1 => "t1",
            Field::T2 => "t2",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// Always in `[1, u32::MAX]`.
    pub addend: u32,
    pub t0: U256,
    /// `t0 + 1`
    pub t1: U256,
    /// `t0 + addend`
    pub t2: U256,
}

impl TestVector {
    /// Builds the vector for `t0`, or names the first sum that does not fit in
    /// 256 bits.
    pub fn new(addend: u32, t0: U256) -> Result<TestVector, Field> {
        let t1 = t0.checked_add_u32(1).ok_or(Field::T1)?;
        let t2 = t0.checked_add_u32(addend).ok_or(Field::T2)?;
        Ok(TestVector { addend, t0, t1, t2 })
    }

    /// Like [`TestVector::new`] but keeps sums modulo 2^256.
    pub fn wrapping(addend: u32, t0: U256) -> TestVector {
        TestVector {
            addend,
            t0,
            t1: t0.overflowing_add_u32(1).0,
            t2: t0.overflowing_add_u32(addend).0,
        }
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x} {:x} {:x}", self.addend, self.t0, self.t1, self.t2)
    }
}

fn parse_addend(text: &str) -> Result<u32, ParseError> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if !canonical {
        return Err(ParseError::Decimal(text.to_string()));
    }

    match text.parse::<u32>() {
        Ok(0) => Err(ParseError::ZeroAddend),
        Ok(n) => Ok(n),
        Err(_) => Err(ParseError::Decimal(text.to_string())),
    }
}

impl FromStr for TestVector {
    type Err = ParseError;

    /// Parses the line exactly as written; the sums are not checked here.
    fn from_str(line: &str) -> Result<TestVector, ParseError> {
        let fields: Vec<&str> = line.split(' ').collect();
        let &[addend, t0, t1, t2] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };

        let hex = |text: &str, field: Field| {
            U256::from_hex(text).map_err(|e| e.in_field(field))
        };

        Ok(TestVector {
            addend: parse_addend(addend).map_err(|e| e.in_field(Field::Addend))?,
            t0: hex(t0, Field::T0)?,
            t1: hex(t1, Field::T1)?,
            t2: hex(t2, Field::T2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZEROS: &str =
        "0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn formats_the_reference_line() {
        let v = TestVector::new(0x1234_5678, U256::ZERO).unwrap();
        let expected = format!(
            "305419896 {ZEROS} {}1 {}12345678",
            &ZEROS[..63],
            &ZEROS[..56]
        );
        assert_eq!(v.to_string(), expected);
    }

    #[test]
    fn new_names_the_overflowing_sum() {
        assert_eq!(TestVector::new(5, U256::MAX), Err(Field::T1));

        let mut bytes = [0xff; 32];
        bytes[31] = 0xfd;
        let t0 = U256::from_be_bytes(bytes);
        // t0 + 1 fits, t0 + 3 does not
        assert_eq!(TestVector::new(3, t0), Err(Field::T2));
        assert!(TestVector::new(2, t0).is_ok());
    }

    #[test]
    fn wrapping_keeps_low_bits() {
        let v = TestVector::wrapping(3, U256::MAX);
        assert_eq!(v.t1, U256::ZERO);
        assert_eq!(v.t2, U256::from(2));
    }

    #[test]
    fn parses_its_own_output() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x80;
        bytes[31] = 0x01;
        let v = TestVector::new(u32::MAX, U256::from_be_bytes(bytes)).unwrap();
        assert_eq!(v.to_string().parse::<TestVector>().unwrap(), v);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            "1 2 3".parse::<TestVector>(),
            Err(ParseError::FieldCount(3))
        ));

        for addend in ["0", "007", "+7", "-1", "4294967296", ""] {
            let line = format!("{addend} {ZEROS} {ZEROS} {ZEROS}");
            match line.parse::<TestVector>() {
                Err(ParseError::Field {
                    field: Field::Addend,
                    ..
                }) => {}
                other => panic!("{addend:?}: unexpected {other:?}"),
            }
        }

        let line = format!("1 {ZEROS} {ZEROS} {}", &ZEROS[1..]);
        match line.parse::<TestVector>() {
            Err(ParseError::Field {
                field: Field::T2,
                source,
            }) => assert!(matches!(*source, ParseError::HexLength(63))),
            other => panic!("unexpected {other:?}"),
        }
    }
}
