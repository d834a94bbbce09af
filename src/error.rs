use snafu::Snafu;

/// Errors raised while decoding an armored AIS payload.
///
/// Any of these aborts the decode immediately; no partially populated
/// message is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum DecodeError {
    /// Payload contains a byte outside the 6-bit armor alphabet
    #[snafu(display("byte 0x{byte:02x} at index {index} is outside the armor alphabet"))]
    InvalidArmorChar { byte: u8, index: usize },

    /// Pad count is out of range for the payload
    #[snafu(display("pad of {pad} trailing bits is invalid for a {payload_bits}-bit payload"))]
    InvalidPad { pad: usize, payload_bits: usize },

    /// Fewer bits remain than the requested field needs
    #[snafu(display("field of {width} bits requested with only {remaining} bits remaining"))]
    TruncatedField { width: usize, remaining: usize },
}
