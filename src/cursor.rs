//! Typed sequential reads over payload bits.
//!
//! AIS fields sit at arbitrary bit offsets, so every message decoder
//! walks the payload with a cursor: each read consumes exactly the
//! field's width and the next read starts where the last one ended.
//! The cursor owns nothing and holds no state beyond its position, so
//! independent decodes never interact.

use bitvec::prelude::*;

use crate::armor::text_char;
use crate::error::DecodeError;
use crate::payload::ArmoredPayload;

/// Read position over an [`ArmoredPayload`].
///
/// All reads are MSB-first and advance the position by the width
/// consumed; a read never partially succeeds.
#[derive(Debug)]
pub struct FieldCursor<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    position: usize,
}

impl<'a> FieldCursor<'a> {
    pub fn new(payload: &'a ArmoredPayload) -> Self {
        Self {
            bits: payload.bits(),
            position: 0,
        }
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }

    fn take(&mut self, width: usize) -> Result<&'a BitSlice<u8, Msb0>, DecodeError> {
        if width > self.remaining() {
            return Err(DecodeError::TruncatedField {
                width,
                remaining: self.remaining(),
            });
        }
        let slice = &self.bits[self.position..self.position + width];
        self.position += width;
        Ok(slice)
    }

    /// Read `width` bits (1-32) as a big-endian unsigned integer.
    pub fn read_unsigned(&mut self, width: usize) -> Result<u32, DecodeError> {
        debug_assert!((1..=32).contains(&width));
        let mut value = 0u32;
        for bit in self.take(width)? {
            value = (value << 1) | (*bit as u32);
        }
        Ok(value)
    }

    /// Read `width` bits as a two's-complement signed integer.
    pub fn read_signed(&mut self, width: usize) -> Result<i32, DecodeError> {
        let raw = self.read_unsigned(width)?;
        // Sign-extend from bit width-1 up to the full i32.
        let shift = 32 - width;
        Ok(((raw << shift) as i32) >> shift)
    }

    /// Read a signed field and divide by `divisor`.
    ///
    /// AIS coordinates are signed 1/10000-minute counts; dividing by
    /// 600000.0 yields decimal degrees.
    pub fn read_scaled_float(&mut self, width: usize, divisor: f64) -> Result<f64, DecodeError> {
        Ok(self.read_signed(width)? as f64 / divisor)
    }

    /// Read a single bit as a flag.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_unsigned(1)? != 0)
    }

    /// Read `char_count` characters of bit-packed 6-bit text.
    ///
    /// Trailing `@` padding is preserved verbatim; stripping it is the
    /// caller's business.
    pub fn read_text(&mut self, char_count: usize) -> Result<String, DecodeError> {
        let mut text = String::with_capacity(char_count);
        for _ in 0..char_count {
            text.push(text_char(self.read_unsigned(6)? as u8));
        }
        Ok(text)
    }

    /// Skip `width` bits without interpreting them.
    pub fn skip(&mut self, width: usize) -> Result<(), DecodeError> {
        self.take(width).map(|_| ())
    }
}
