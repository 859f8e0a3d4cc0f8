/// Bit stream assembly: mode header, payload, terminator and padding
use std::fmt;

use crate::debug::debug_log;
use crate::encoder::modes::encode_payload;
use crate::encoder::tables::data_capacity_bits;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Mode, Version};

/// Pad codewords appended alternately after the data
pub const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Growable MSB-first bit sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bit has been written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    /// Append every bit of `other`
    pub fn extend(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Pack into bytes, zero-filling the final partial byte
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Output of the data encoder: exact-length data codewords for the
/// smallest version that holds the payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    /// Mode of the payload
    pub mode: Mode,
    /// Correction level the version was chosen for
    pub level: ECLevel,
    /// Smallest version that fits
    pub version: Version,
    /// Value written to the character count field
    pub char_count: usize,
    /// Header + payload bits, before terminator and padding
    pub used_bits: usize,
    /// Data codewords, padded to the version's capacity
    pub codewords: Vec<u8>,
}

/// Smallest version whose capacity fits the header and `payload_bits`
pub fn select_version(payload_bits: usize, mode: Mode, level: ECLevel) -> Result<Version> {
    Version::all()
        .find(|&version| {
            data_capacity_bits(level, version) >= payload_bits + 4 + mode.count_bits(version)
        })
        .ok_or(QrError::CapacityExceeded {
            bits: payload_bits + 4 + mode.count_bits(Version::MAX),
            level,
        })
}

/// Encode `text` into data codewords
pub fn encode(text: &str, mode: Mode, level: ECLevel) -> Result<EncodedData> {
    let mut payload = BitBuffer::new();
    let char_count = encode_payload(text, mode, &mut payload)?;
    let version = select_version(payload.len(), mode, level)?;
    let capacity = data_capacity_bits(level, version);

    let mut bits = BitBuffer::with_capacity(capacity);
    bits.push_bits(mode.indicator() as u32, 4);
    bits.push_bits(char_count as u32, mode.count_bits(version));
    bits.extend(&payload);
    let used_bits = bits.len();

    // Terminator (up to four zeros), then zeros to the byte boundary.
    let terminator = (capacity - bits.len()).min(4);
    bits.push_bits(0, terminator);
    let alignment = (8 - bits.len() % 8) % 8;
    bits.push_bits(0, alignment);

    let mut codewords = bits.to_bytes();
    let shortfall = (capacity / 8).saturating_sub(codewords.len());
    codewords.extend(PAD_CODEWORDS.iter().cycle().take(shortfall));
    codewords.truncate(capacity / 8);

    debug_log!(
        "encoded {} chars as {} in v{}-{}: {}/{} bits used",
        char_count,
        mode,
        version,
        level,
        used_bits,
        capacity
    );

    Ok(EncodedData {
        mode,
        level,
        version,
        char_count,
        used_bits,
        codewords,
    })
}
