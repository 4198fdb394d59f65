//! The generation loop.

use std::io::Write;

use log::{debug, warn};
use rand::RngCore;

use crate::{
    error::GenerateError,
    u256::{U256, BYTES},
    vector::TestVector,
};

/// What to emit when `t0 + 1` or `t0 + rand_u32` needs more than 256 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OverflowPolicy {
    /// Keep the sum modulo 2^256.
    #[default]
    Wrap,
    /// Throw the draw away and draw again.
    Redraw,
    /// Stop with an error.
    Fail,
}

/// Uniform over `[1, u32::MAX]`.
pub fn draw_addend<R: RngCore + ?Sized>(rng: &mut R) -> u32 {
    loop {
        let n = rng.next_u32();
        if n != 0 {
            return n;
        }
    }
}

pub fn draw_t0<R: RngCore + ?Sized>(rng: &mut R) -> U256 {
    let mut bytes = [0u8; BYTES];
    rng.fill_bytes(&mut bytes);
    U256::from_be_bytes(bytes)
}

/// Draws one vector, applying `policy` to sums that overflow.
pub fn draw_vector<R: RngCore + ?Sized>(
    rng: &mut R,
    policy: OverflowPolicy,
) -> Result<TestVector, GenerateError> {
    loop {
        let addend = draw_addend(rng);
        let t0 = draw_t0(rng);

        let field = match TestVector::new(addend, t0) {
            Ok(v) => return Ok(v),
            Err(field) => field,
        };

        match policy {
            OverflowPolicy::Wrap => {
                debug!("{field} wrapped past 2^256");
                return Ok(TestVector::wrapping(addend, t0));
            }
            OverflowPolicy::Redraw => {
                debug!("{field} overflowed, redrawing");
            }
            OverflowPolicy::Fail => {
                return Err(GenerateError::Overflow {
                    field,
                    t0: t0.to_string(),
                    addend,
                });
            }
        }
    }
}

/// Writes `count` vectors, one per line. Returns the number written.
pub fn write_vectors<R, W>(
    rng: &mut R,
    writer: &mut W,
    count: u64,
    policy: OverflowPolicy,
) -> Result<u64, GenerateError>
where
    R: RngCore + ?Sized,
    W: Write + ?Sized,
{
    for i in 0..count {
        let vector = match draw_vector(rng, policy) {
            Ok(v) => v,
            Err(e) => {
                warn!("stopping after {i} of {count} vectors");
                return Err(e);
            }
        };
        writeln!(writer, "{vector}")?;
    }
    writer.flush()?;

    Ok(count)
}
