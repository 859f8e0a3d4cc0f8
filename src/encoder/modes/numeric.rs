/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, Result};
use crate::models::Mode;

/// Writes digits in groups of three
pub struct NumericEncoder;

impl NumericEncoder {
    /// Append the payload bits of `text`; returns the character count
    pub fn encode(text: &str, bits: &mut BitBuffer) -> Result<usize> {
        let digits = text
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(10).ok_or(QrError::InvalidCharacter {
                    ch,
                    position,
                    mode: Mode::Numeric,
                })
            })
            .collect::<Result<Vec<u32>>>()?;

        for group in digits.chunks(3) {
            let value = group.iter().fold(0u32, |acc, &d| acc * 10 + d);
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            bits.push_bits(value, width);
        }

        Ok(digits.len())
    }
}
