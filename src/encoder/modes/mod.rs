//! QR code data mode encoders
//!
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and symbols
//! - Byte: 8-bit data (UTF-8)

/// Alphanumeric mode
pub mod alphanumeric;
/// Byte mode
pub mod byte;
/// Numeric mode
pub mod numeric;

use crate::encoder::bitstream::BitBuffer;
use crate::error::Result;
use crate::models::Mode;

/// Append the payload of `text` in `mode`; returns the count field value
pub fn encode_payload(text: &str, mode: Mode, bits: &mut BitBuffer) -> Result<usize> {
    match mode {
        Mode::Numeric => numeric::NumericEncoder::encode(text, bits),
        Mode::Alphanumeric => alphanumeric::AlphanumericEncoder::encode(text, bits),
        Mode::Byte => Ok(byte::ByteEncoder::encode(text, bits)),
    }
}
