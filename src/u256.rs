//! Fixed-width 256-bit unsigned integer.
//!
//! Stored as eight 32-bit limbs, least significant limb first. The text form is
//! always 64 lowercase hex digits, most significant byte first.

use std::fmt;

use crate::error::ParseError;

pub const BYTES: usize = 32;
pub const HEX_LEN: usize = BYTES * 2;
const LIMBS: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256 {
    limbs: [u32; LIMBS],
}

impl U256 {
    pub const ZERO: U256 = U256 { limbs: [0; LIMBS] };
    pub const MAX: U256 = U256 {
        limbs: [u32::MAX; LIMBS],
    };

    pub fn from_be_bytes(bytes: [u8; BYTES]) -> U256 {
        let mut limbs = [0u32; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(4).rev()) {
            *limb = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        U256 { limbs }
    }

    pub fn to_be_bytes(&self) -> [u8; BYTES] {
        let mut bytes = [0u8; BYTES];
        for (chunk, limb) in bytes.chunks_exact_mut(4).zip(self.limbs.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    /// Adds `rhs`, returning the sum modulo 2^256 and whether a carry left the
    /// top limb.
    pub fn overflowing_add_u32(&self, rhs: u32) -> (U256, bool) {
        let mut limbs = self.limbs;
        let (sum, mut carry) = limbs[0].overflowing_add(rhs);
        limbs[0] = sum;

        for limb in limbs.iter_mut().skip(1) {
            if !carry {
                break;
            }
            (*limb, carry) = limb.overflowing_add(1);
        }

        (U256 { limbs }, carry)
    }

    pub fn checked_add_u32(&self, rhs: u32) -> Option<U256> {
        match self.overflowing_add_u32(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    pub fn from_hex(text: &str) -> Result<U256, ParseError> {
        if text.len() != HEX_LEN {
            return Err(ParseError::HexLength(text.len()));
        }
        // hex::decode accepts upper case too; the wire format doesn't
        if let Some(c) = text
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(ParseError::HexDigit(c));
        }

        let mut bytes = [0u8; BYTES];
        hex::decode_to_slice(text, &mut bytes)?;
        Ok(U256::from_be_bytes(bytes))
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> U256 {
        let mut limbs = [0u32; LIMBS];
        limbs[0] = value;
        U256 { limbs }
    }
}
