/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

/// Writes the UTF-8 bytes of the text, 8 bits each
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append the UTF-8 bytes of `text`; returns the byte count
    pub fn encode(text: &str, bits: &mut BitBuffer) -> usize {
        for &byte in text.as_bytes() {
            bits.push_bits(byte as u32, 8);
        }
        text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_encode() {
        // "HI" in ASCII = 72, 73
        let mut bits = BitBuffer::new();
        assert_eq!(ByteEncoder::encode("HI", &mut bits), 2);
        assert_eq!(bits.to_string(), "0100100001001001");
    }

    #[test]
    fn test_byte_counts_utf8_bytes() {
        let mut bits = BitBuffer::new();
        assert_eq!(ByteEncoder::encode("é", &mut bits), 2);
        assert_eq!(bits.to_bytes(), vec![0xC3, 0xA9]);
    }
}
