/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits, single = 6 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, Result};
use crate::models::Mode;
use crate::models::qr_code::alphanumeric_index;

/// Writes characters of the 45-symbol alphabet in pairs
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Append the payload bits of `text`; returns the character count
    pub fn encode(text: &str, bits: &mut BitBuffer) -> Result<usize> {
        let codes = text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                alphanumeric_index(ch).ok_or(QrError::InvalidCharacter {
                    ch,
                    position,
                    mode: Mode::Alphanumeric,
                })
            })
            .collect::<Result<Vec<u16>>>()?;

        for pair in codes.chunks(2) {
            match *pair {
                [first, second] => bits.push_bits(first as u32 * 45 + second as u32, 11),
                [single] => bits.push_bits(single as u32, 6),
                _ => {}
            }
        }

        Ok(codes.len())
    }
}
