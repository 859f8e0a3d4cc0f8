use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// Block layout of one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Number of correction blocks
    pub num_blocks: usize,
    /// Correction codewords in each block
    pub ecc_per_block: usize,
    /// Total codewords in the symbol (data + correction)
    pub total_codewords: usize,
    /// Data codewords across all blocks
    pub data_codewords: usize,
}

impl EcBlockInfo {
    /// Data codewords in the short blocks; long blocks hold one more
    pub fn short_block_len(&self) -> usize {
        self.data_codewords / self.num_blocks
    }

    /// Number of long blocks (placed after the short ones)
    pub fn long_blocks(&self) -> usize {
        self.data_codewords % self.num_blocks
    }
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Look up the block layout for a version and level
pub fn ec_block_info(version: u8, ec_level: ECLevel) -> Result<EcBlockInfo> {
    let lookup_failed = QrError::TableLookup {
        version,
        level: ec_level,
    };
    if !(1..=40).contains(&version) {
        return Err(lookup_failed);
    }
    let idx = ec_level.ordinal();
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][version as usize];
    let blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][version as usize];
    if ecc <= 0 || blocks <= 0 {
        return Err(lookup_failed);
    }
    let num_blocks = blocks as usize;
    let ecc_per_block = ecc as usize;
    let total_codewords = raw_data_modules(version) / 8;
    Ok(EcBlockInfo {
        num_blocks,
        ecc_per_block,
        total_codewords,
        data_codewords: total_codewords - num_blocks * ecc_per_block,
    })
}

/// Data capacity in bits for a version and level
pub fn data_capacity_bits(ec_level: ECLevel, version: Version) -> usize {
    // Version is already range-checked, so the lookup cannot miss.
    ec_block_info(version.number(), ec_level)
        .map(|info| info.data_codewords * 8)
        .unwrap_or(0)
}

/// Modules left for codewords once every function pattern is drawn,
/// including the remainder bits that do not fill a whole codeword.
pub fn raw_data_modules(version: u8) -> usize {
    let v = version as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Side length in modules for a version, without quiet zone
pub fn symbol_size(version: u8) -> usize {
    17 + 4 * version as usize
}

/// Alignment pattern centers for a given version.
///
/// The first entry is always 6 for versions 2+, so the three pairs that
/// coincide with finder corners are part of the product and must be skipped
/// by the caller.
pub fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version <= 1 {
        return Vec::new();
    }
    let num_align = (version / 7) as usize + 2;
    let size = symbol_size(version);
    let step = if version == 32 {
        26
    } else {
        let numerator = version as usize * 4 + num_align * 2 + 1;
        let denom = num_align * 2 - 2;
        (numerator / denom) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for slot in positions.iter_mut().skip(1).rev() {
        *slot = pos;
        pos -= step;
    }
    positions
}
