//! Minimal reader used by the integration tests: takes a finished symbol
//! back to its text and checks every correction block along the way.
#![allow(dead_code)]

use rust_qr_gen::encoder::bch::format_info_bits;
use rust_qr_gen::encoder::tables::{alignment_pattern_positions, ec_block_info};
use rust_qr_gen::{BitMatrix, ECLevel, MaskPattern, Mode, Symbol, Version};

/// What the reader recovered from a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub mode: Mode,
    pub version: u8,
    pub level: ECLevel,
    pub mask: MaskPattern,
    pub data_codewords: Vec<u8>,
}

/// Read a symbol back. Fails on unreadable format info, non-zero syndromes
/// or a malformed bit stream.
pub fn read(symbol: &Symbol) -> Result<Decoded, String> {
    let size = symbol.size();
    if size < 21 || (size - 17) % 4 != 0 {
        return Err(format!("bad symbol size {size}"));
    }
    let version = ((size - 17) / 4) as u8;
    let dark = |x: usize, y: usize| symbol.is_dark(x, y);

    let (level, mask) = read_format(size, &dark)?;
    let func = function_mask(version);

    // Zigzag extraction, unmasking as we go
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = size as isize - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
        }
        for step in 0..size {
            let y = if upward { size - 1 - step } else { step };
            for x in [col as usize, col as usize - 1] {
                if !func.get(x, y) {
                    bits.push(dark(x, y) ^ mask.is_masked(x, y));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }

    let info = ec_block_info(version, level).map_err(|e| e.to_string())?;
    let codewords: Vec<u8> = bits
        .chunks(8)
        .take(info.total_codewords)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | u8::from(b)))
        .collect();
    if codewords.len() != info.total_codewords {
        return Err(format!(
            "read {} codewords, expected {}",
            codewords.len(),
            info.total_codewords
        ));
    }

    // De-interleave: data columns (short blocks skip the last), then ECC columns
    let short_len = info.short_block_len();
    let first_long = info.num_blocks - info.long_blocks();
    let mut blocks: Vec<Vec<u8>> = vec![Vec::new(); info.num_blocks];
    let mut cursor = codewords.iter().copied();
    for column in 0..=short_len {
        for (b, block) in blocks.iter_mut().enumerate() {
            if column < short_len || b >= first_long {
                block.push(cursor.next().ok_or("truncated data")?);
            }
        }
    }
    let data_lens: Vec<usize> = blocks.iter().map(Vec::len).collect();
    for _ in 0..info.ecc_per_block {
        for block in blocks.iter_mut() {
            block.push(cursor.next().ok_or("truncated correction")?);
        }
    }

    for (b, block) in blocks.iter().enumerate() {
        for i in 0..info.ecc_per_block {
            if evaluate(block, gf_pow2(i)) != 0 {
                return Err(format!("block {b}: syndrome {i} is non-zero"));
            }
        }
    }

    let data_codewords: Vec<u8> = blocks
        .iter()
        .zip(&data_lens)
        .flat_map(|(block, &len)| block[..len].iter().copied())
        .collect();
    let symbol_version = Version::new(version).map_err(|e| e.to_string())?;
    let (mode, text) = parse_payload(&data_codewords, symbol_version)?;

    Ok(Decoded {
        text,
        mode,
        version,
        level,
        mask,
        data_codewords,
    })
}

/// Both format copies must agree and carry a valid BCH codeword
fn read_format(
    size: usize,
    dark: &impl Fn(usize, usize) -> bool,
) -> Result<(ECLevel, MaskPattern), String> {
    let mut first = 0u16;
    let mut second = 0u16;
    for i in 0..15 {
        let (x, y) = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        first |= u16::from(dark(x, y)) << i;

        let (x, y) = if i < 8 { (size - 1 - i, 8) } else { (8, size - 15 + i) };
        second |= u16::from(dark(x, y)) << i;
    }
    if first != second {
        return Err(format!("format copies differ: {first:#06x} vs {second:#06x}"));
    }
    decode_format(first).ok_or_else(|| format!("invalid format bits {first:#06x}"))
}

/// Level and mask whose masked codeword is exactly `bits`
fn decode_format(bits: u16) -> Option<(ECLevel, MaskPattern)> {
    ECLevel::ALL
        .iter()
        .flat_map(|&level| MaskPattern::ALL.map(|mask| (level, mask)))
        .find(|&(level, mask)| format_info_bits(level, mask) == bits)
}

/// Function modules of a version, built independently of the encoder's canvas
pub fn function_mask(version: u8) -> BitMatrix {
    let size = 17 + 4 * version as usize;
    let mut mask = BitMatrix::new(size, size);

    for (ox, oy) in [(0, 0), (size - 8, 0), (0, size - 8)] {
        mask.fill_rect(ox, oy, 8, 8, true);
    }
    for i in 0..size {
        mask.set(6, i, true);
        mask.set(i, 6, true);
    }

    let align = alignment_pattern_positions(version);
    for &cx in &align {
        for &cy in &align {
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            mask.fill_rect(cx - 2, cy - 2, 5, 5, true);
        }
    }

    for i in 0..9 {
        mask.set(8, i, true);
        mask.set(i, 8, true);
    }
    for i in 0..8 {
        mask.set(size - 1 - i, 8, true);
        mask.set(8, size - 1 - i, true);
    }

    if version >= 7 {
        mask.fill_rect(size - 11, 0, 3, 6, true);
        mask.fill_rect(0, size - 11, 6, 3, true);
    }

    mask
}

fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

fn gf_pow2(e: usize) -> u8 {
    (0..e).fold(1u8, |acc, _| gf_mul(acc, 2))
}

/// Horner evaluation, first byte is the highest power
fn evaluate(poly: &[u8], x: u8) -> u8 {
    poly.iter().fold(0u8, |acc, &c| gf_mul(acc, x) ^ c)
}

struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl BitReader<'_> {
    fn read(&mut self, count: usize) -> Result<u32, String> {
        if self.pos + count > self.bytes.len() * 8 {
            return Err(format!("bit stream ends at {} (wanted {count} more)", self.pos));
        }
        let mut value = 0u32;
        for _ in 0..count {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            self.pos += 1;
        }
        Ok(value)
    }
}

const ALPHANUMERIC: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

fn parse_payload(data: &[u8], version: Version) -> Result<(Mode, String), String> {
    let mut reader = BitReader { bytes: data, pos: 0 };
    let mode = match reader.read(4)? {
        0b0001 => Mode::Numeric,
        0b0010 => Mode::Alphanumeric,
        0b0100 => Mode::Byte,
        other => return Err(format!("unexpected mode indicator {other:04b}")),
    };
    let count = reader.read(mode.count_bits(version))? as usize;

    let text = match mode {
        Mode::Numeric => {
            let mut text = String::with_capacity(count);
            let mut remaining = count;
            while remaining > 0 {
                let group = remaining.min(3);
                let width = [0, 4, 7, 10][group];
                let value = reader.read(width)?;
                text.push_str(&format!("{:0width$}", value, width = group));
                remaining -= group;
            }
            text
        }
        Mode::Alphanumeric => {
            let mut text = String::with_capacity(count);
            let char_at = |i: u32| {
                ALPHANUMERIC
                    .get(i as usize)
                    .map(|&b| b as char)
                    .ok_or_else(|| format!("alphanumeric value {i} out of range"))
            };
            for _ in 0..count / 2 {
                let value = reader.read(11)?;
                text.push(char_at(value / 45)?);
                text.push(char_at(value % 45)?);
            }
            if count % 2 == 1 {
                text.push(char_at(reader.read(6)?)?);
            }
            text
        }
        Mode::Byte => {
            let bytes = (0..count)
                .map(|_| reader.read(8).map(|b| b as u8))
                .collect::<Result<Vec<u8>, String>>()?;
            String::from_utf8(bytes).map_err(|e| e.to_string())?
        }
    };

    Ok((mode, text))
}
