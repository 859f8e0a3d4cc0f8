/// Codeword placement along the zigzag path
use crate::layout::canvas::Canvas;
use crate::layout::mask::apply_mask;
use crate::models::MaskPattern;

/// Place `codewords` MSB-first into every unreserved module.
///
/// Columns are walked in pairs from the right edge, upward first and
/// alternating direction each pair, skipping the vertical timing column.
/// Modules past the last codeword get zero bits. Every bit is masked.
/// Returns the number of modules written.
pub fn place_codewords(canvas: &mut Canvas, codewords: &[u8], mask: MaskPattern) -> usize {
    let size = canvas.size();
    let total_bits = codewords.len() * 8;
    let mut index = 0usize;
    let mut upward = true;
    let mut col = size as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for step in 0..size {
            let y = if upward { size - 1 - step } else { step };
            for x in [col as usize, col as usize - 1] {
                if canvas.is_reserved(x, y) {
                    continue;
                }
                let bit = index < total_bits && (codewords[index / 8] >> (7 - index % 8)) & 1 != 0;
                canvas.set_data(x, y, apply_mask(mask, bit, x, y), index / 8);
                index += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }

    index
}
