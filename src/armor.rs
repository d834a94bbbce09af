//! AIS 6-bit alphabets.
//!
//! AIS payloads travel in two distinct 6-bit encodings. The *armor*
//! alphabet maps each transmitted NMEA character to a 6-bit group:
//! ASCII 48–87 cover values 0–39, then the range jumps to ASCII 96–119
//! for values 40–63, skipping eight codes in between. The *text*
//! alphabet is unrelated: it maps 6-bit groups inside an already
//! de-armored message to the characters of bit-packed string fields.

use lazy_static::lazy_static;

/// 6-bit text alphabet for bit-packed string fields, indexed by value.
///
/// Value 0 is `@`, which doubles as the string padding character.
pub const CHARSET_SIXBIT: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

lazy_static! {
    /// Armor value for every byte, or `None` outside the alphabet.
    static ref ARMOR_TABLE: [Option<u8>; 256] = {
        let mut table = [None; 256];
        for b in 48u8..=87 {
            table[b as usize] = Some(b - 48);
        }
        for b in 96u8..=119 {
            table[b as usize] = Some(b - 48 - 8);
        }
        table
    };
}

/// Look up the 6-bit armor value of a payload byte.
///
/// Returns `None` for the eight reserved codes (ASCII 88–95) and for
/// anything outside ASCII 48–119.
#[inline]
pub fn armor_value(byte: u8) -> Option<u8> {
    ARMOR_TABLE[byte as usize]
}

/// Map a 6-bit value to its text-alphabet character.
#[inline]
pub fn text_char(value: u8) -> char {
    CHARSET_SIXBIT[(value & 0x3f) as usize] as char
}
