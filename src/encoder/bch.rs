/// BCH codes protecting the format and version information
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// Mask XORed onto the format codeword so it is never all zero
const FORMAT_XOR_MASK: u16 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Remainder of `data · x^degree` divided by `generator` over GF(2)
fn bch_remainder(data: u32, generator: u32, degree: u32) -> u32 {
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
    }
    rem & ((1 << degree) - 1)
}

/// 15-bit format information codeword (5 data bits + 10 ECC), already masked.
/// Bit 14 is transmitted first.
pub fn format_info_bits(level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((level.format_bits() as u32) << 3) | mask.index() as u32;
    let rem = bch_remainder(data, FORMAT_GENERATOR, 10);
    (((data << 10) | rem) as u16) ^ FORMAT_XOR_MASK
}

/// 18-bit version information codeword (6 data bits + 12 ECC), versions 7-40.
/// Bit 17 is the most significant bit of the version number.
pub fn version_info_bits(version: u8) -> Result<u32> {
    if !(7..=40).contains(&version) {
        return Err(QrError::InvalidVersion(version));
    }
    let data = version as u32;
    Ok((data << 12) | bch_remainder(data, VERSION_GENERATOR, 12))
}
