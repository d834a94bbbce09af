//! De-armored AIS payload bits.
//!
//! Each character of an `!AIVDM` body carries six bits; the sentence
//! framing additionally names how many trailing bits of the last
//! character are padding and must be discarded. This module turns the
//! `(body, pad)` pair into an immutable MSB-first bit buffer that the
//! field cursor can read at arbitrary offsets.

use bitvec::prelude::*;

use crate::armor::armor_value;
use crate::error::DecodeError;

/// An AIS payload de-armored into its raw message bits.
///
/// Immutable once built; every decode pass borrows the bits through a
/// fresh [`FieldCursor`](crate::cursor::FieldCursor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmoredPayload {
    bits: BitVec<u8, Msb0>,
}

impl ArmoredPayload {
    /// De-armor a payload body, dropping `pad` trailing bits.
    ///
    /// # Arguments
    /// * `body` - Armored payload characters from the NMEA sentence
    /// * `pad` - Trailing pad bits to discard (0-5)
    ///
    /// # Errors
    /// `InvalidArmorChar` for any byte outside the armor alphabet,
    /// `InvalidPad` if `pad` exceeds 5 or the whole payload.
    pub fn from_armored(body: &str, pad: usize) -> Result<Self, DecodeError> {
        let payload_bits = body.len() * 6;

        if pad > 5 || pad >= payload_bits.max(1) {
            return Err(DecodeError::InvalidPad { pad, payload_bits });
        }

        let mut bits = BitVec::with_capacity(payload_bits);
        for (index, byte) in body.bytes().enumerate() {
            let value =
                armor_value(byte).ok_or(DecodeError::InvalidArmorChar { byte, index })?;
            for shift in (0..6).rev() {
                bits.push((value >> shift) & 1 != 0);
            }
        }
        bits.truncate(payload_bits - pad);

        Ok(Self { bits })
    }

    /// Total number of message bits after pad removal.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the raw bits, MSB-first.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }
}
