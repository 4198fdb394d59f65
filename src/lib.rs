//! Test vectors for 256-bit addition.
//!
//! Each line is `<rand_u32> <t0> <t1> <t2>` where `t0` is 32 random bytes,
//! `t1 = t0 + 1` and `t2 = t0 + rand_u32`, the big values rendered as 64
//! lowercase hex digits.

pub mod error;
pub mod generator;
pub mod u256;
pub mod vector;
pub mod verify;

pub use error::{GenerateError, ParseError, VerifyError};
pub use generator::{write_vectors, OverflowPolicy};
pub use u256::U256;
pub use vector::{Field, TestVector};
pub use verify::{verify_vectors, VerifyReport};
