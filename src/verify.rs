//! Reads vector lines back and checks them against arbitrary precision
//! arithmetic, independent of the limb adder in [`crate::u256`].

use std::io::BufRead;

use log::debug;
use num_bigint::BigUint;

use crate::{
    error::VerifyError,
    u256::U256,
    vector::{Field, TestVector},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub lines: u64,
    /// Lines where `t0 + 1` or `t0 + rand_u32` went past 2^256.
    pub wrapped: u64,
}

fn big(n: &U256) -> BigUint {
    BigUint::from_bytes_be(&n.to_be_bytes())
}

/// Checks both sums modulo 2^256. Returns whether either one wrapped.
pub fn check_vector(vector: &TestVector, line: u64) -> Result<bool, VerifyError> {
    let modulus = BigUint::from(1u8) << 256;
    let t0 = big(&vector.t0);
    let mut wrapped = false;

    for (field, addend, actual) in [
        (Field::T1, 1, &vector.t1),
        (Field::T2, vector.addend, &vector.t2),
    ] {
        let sum = &t0 + addend;
        wrapped |= sum >= modulus;
        let expected = sum % &modulus;

        if expected != big(actual) {
            return Err(VerifyError::Mismatch {
                line,
                field,
                expected: format!("{expected:064x}"),
                actual: actual.to_string(),
            });
        }
    }

    Ok(wrapped)
}

pub fn verify_vectors<R: BufRead>(reader: R) -> Result<VerifyReport, VerifyError> {
    let mut report = VerifyReport::default();

    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx as u64 + 1;

        let vector: TestVector = text
            .parse()
            .map_err(|source| VerifyError::Parse { line, source })?;
        if vector.to_string() != text {
            return Err(VerifyError::NotCanonical { line });
        }

        if check_vector(&vector, line)? {
            debug!("line {line}: sum wrapped past 2^256");
            report.wrapped += 1;
        }
        report.lines += 1;
    }

    Ok(report)
}
