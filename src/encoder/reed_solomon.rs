/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use std::sync::OnceLock;

use crate::debug::debug_log;
use crate::encoder::tables::{EcBlockInfo, ec_block_info};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

/// Largest correction block used by any version/level pair
pub const MAX_ECC_PER_BLOCK: usize = 30;

impl Gf256 {
    /// α^e, with the exponent reduced modulo 255
    pub fn exp(e: usize) -> u8 {
        EXP_TABLE[e % 255]
    }

    /// Discrete logarithm; zero has none
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(LOG_TABLE[a as usize])
        }
    }

    /// Field addition (and subtraction)
    pub fn add(a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Field multiplication through the log tables
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }
}

/// Generator g(x) = (x - α^0)(x - α^1)...(x - α^(degree-1)), highest power
/// first, leading 1 dropped, every coefficient stored as its logarithm.
fn build_generator(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..degree {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= Gf256::mul(coeff, root);
        }
        poly = next;
    }
    // No coefficient of these generators is zero.
    poly[1..]
        .iter()
        .map(|&coeff| Gf256::log(coeff).unwrap_or(0))
        .collect()
}

fn generator_log(degree: usize) -> &'static [u8] {
    static GENERATORS: OnceLock<Vec<Vec<u8>>> = OnceLock::new();
    let all = GENERATORS.get_or_init(|| (0..=MAX_ECC_PER_BLOCK).map(build_generator).collect());
    &all[degree]
}

/// Reed-Solomon encoder producing a fixed number of correction codewords
pub struct ReedSolomonEncoder {
    koef: &'static [u8],
}

impl ReedSolomonEncoder {
    /// Encoder for `num_ecc_codewords` in 1..=30
    pub fn new(num_ecc_codewords: usize) -> Result<Self> {
        if !(1..=MAX_ECC_PER_BLOCK).contains(&num_ecc_codewords) {
            return Err(QrError::InvalidEccLength(num_ecc_codewords));
        }
        Ok(Self {
            koef: generator_log(num_ecc_codewords),
        })
    }

    /// Correction codewords for one data block: the remainder of
    /// block(x)·x^n divided by g(x), by synthetic division.
    pub fn remainder(&self, block: &[u8]) -> Vec<u8> {
        let n = self.koef.len();
        let mut buffer = vec![0u8; block.len().max(n)];
        buffer[..block.len()].copy_from_slice(block);

        for _ in 0..block.len() {
            let lead = buffer.remove(0);
            buffer.push(0);
            let Some(lead_log) = Gf256::log(lead) else {
                continue;
            };
            for (slot, &k) in buffer.iter_mut().zip(self.koef) {
                *slot = Gf256::add(*slot, Gf256::exp(k as usize + lead_log as usize));
            }
        }

        buffer.truncate(n);
        buffer
    }
}

/// Split codewords into `num_blocks` contiguous blocks, short blocks first
pub fn split_blocks(codewords: &[u8], num_blocks: usize) -> Vec<&[u8]> {
    let total = codewords.len();
    let block_size = total / num_blocks;
    let first_big_block_index = num_blocks - (total - block_size * num_blocks);

    let mut blocks = Vec::with_capacity(num_blocks);
    let mut start = 0;
    for index in 0..num_blocks {
        let len = if index >= first_big_block_index {
            block_size + 1
        } else {
            block_size
        };
        blocks.push(&codewords[start..start + len]);
        start += len;
    }
    blocks
}

/// Transmission order: data column by column across blocks, then correction
pub fn interleave(data_blocks: &[&[u8]], ecc_blocks: &[Vec<u8>]) -> Vec<u8> {
    let data_len: usize = data_blocks.iter().map(|b| b.len()).sum();
    let ecc_len: usize = ecc_blocks.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(data_len + ecc_len);

    let longest = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for column in 0..longest {
        for block in data_blocks {
            if let Some(&byte) = block.get(column) {
                result.push(byte);
            }
        }
    }

    let correction_size = ecc_blocks.first().map_or(0, Vec::len);
    for column in 0..correction_size {
        for block in ecc_blocks {
            result.push(block[column]);
        }
    }

    result
}

/// Add correction codewords to the data codewords of a symbol and interleave
pub fn compute(codewords: &[u8], version: Version, level: ECLevel) -> Result<Vec<u8>> {
    let info: EcBlockInfo = ec_block_info(version.number(), level)?;
    debug_assert_eq!(codewords.len(), info.data_codewords);

    let encoder = ReedSolomonEncoder::new(info.ecc_per_block)?;
    let blocks = split_blocks(codewords, info.num_blocks);
    let ecc_blocks: Vec<Vec<u8>> = blocks.iter().map(|block| encoder.remainder(block)).collect();

    debug_log!(
        "v{}-{}: {} blocks ({} short of {}, {} long), {} ecc each",
        version,
        level,
        info.num_blocks,
        info.num_blocks - info.long_blocks(),
        info.short_block_len(),
        info.long_blocks(),
        info.ecc_per_block
    );

    Ok(interleave(&blocks, &ecc_blocks))
}
