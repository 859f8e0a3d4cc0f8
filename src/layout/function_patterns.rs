/// Function patterns: quiet zone, timing, finders, alignment, version and format info
use crate::encoder::bch::{format_info_bits, version_info_bits};
use crate::encoder::tables::alignment_pattern_positions;
use crate::layout::canvas::Canvas;
use crate::models::{ECLevel, MaskPattern};

/// Mask whose format bits reserve the format area before the real mask is known
pub const PLACEHOLDER_MASK: MaskPattern = MaskPattern::Pattern0;

/// Draw every function pattern, reserving the format area with the placeholder mask
pub fn draw_function_patterns(canvas: &mut Canvas, level: ECLevel) {
    canvas.draw_quiet_zone();
    draw_timing_patterns(canvas);
    draw_finder_patterns(canvas);
    draw_alignment_patterns(canvas);
    draw_version_info(canvas);
    draw_format_info(canvas, level, PLACEHOLDER_MASK);
}

/// Row 6 and column 6, dark on even indices
pub fn draw_timing_patterns(canvas: &mut Canvas) {
    let size = canvas.size();
    for i in 0..size {
        canvas.draw(6, i, i % 2 == 0);
        canvas.draw(i, 6, i % 2 == 0);
    }
}

/// The three 7x7 finders with their light separators
pub fn draw_finder_patterns(canvas: &mut Canvas) {
    let size = canvas.size();
    draw_finder(canvas, 3, 3);
    draw_finder(canvas, size - 4, 3);
    draw_finder(canvas, 3, size - 4);
}

/// 9x9 area around the finder center: rings at distance 2 and 4 are light,
/// clipped to the data area
fn draw_finder(canvas: &mut Canvas, cx: usize, cy: usize) {
    let size = canvas.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let x = cx as isize + dx;
            let y = cy as isize + dy;
            if !(0..size).contains(&x) || !(0..size).contains(&y) {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            canvas.draw(x as usize, y as usize, dist != 2 && dist != 4);
        }
    }
}

/// 5x5 alignment patterns on the position grid, minus the three finder corners
pub fn draw_alignment_patterns(canvas: &mut Canvas) {
    let positions = alignment_pattern_positions(canvas.version().number());
    let last = positions.len().saturating_sub(1);
    for (i, &cx) in positions.iter().enumerate() {
        for (j, &cy) in positions.iter().enumerate() {
            let on_finder = (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0);
            if on_finder {
                continue;
            }
            for dy in 0..5 {
                for dx in 0..5 {
                    let dist = (dx as isize - 2).abs().max((dy as isize - 2).abs());
                    canvas.draw(cx - 2 + dx, cy - 2 + dy, dist != 1);
                }
            }
        }
    }
}

/// Two mirrored 6x3 blocks of version information, versions 7+
pub fn draw_version_info(canvas: &mut Canvas) {
    let Ok(bits) = version_info_bits(canvas.version().number()) else {
        return;
    };
    let size = canvas.size();
    for i in 0..18 {
        let dark = (bits >> i) & 1 != 0;
        let a = size - 11 + i % 3;
        let b = i / 3;
        canvas.draw(a, b, dark);
        canvas.draw(b, a, dark);
    }
}

/// Both copies of the 15-bit format information and the dark module.
///
/// Bit 0 of the codeword sits at (8, 0) in the first copy and at
/// (size-1, 8) in the second.
pub fn draw_format_info(canvas: &mut Canvas, level: ECLevel, mask: MaskPattern) {
    let bits = format_info_bits(level, mask);
    let bit = |i: usize| (bits >> i) & 1 != 0;
    let size = canvas.size();

    // Around the top-left finder
    for i in 0..=5 {
        canvas.draw(8, i, bit(i));
    }
    canvas.draw(8, 7, bit(6));
    canvas.draw(8, 8, bit(7));
    canvas.draw(7, 8, bit(8));
    for i in 9..15 {
        canvas.draw(14 - i, 8, bit(i));
    }

    // Split between the top-right and bottom-left finders
    for i in 0..8 {
        canvas.draw(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        canvas.draw(8, size - 15 + i, bit(i));
    }
    canvas.draw(8, size - 8, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::raw_data_modules;
    use crate::layout::canvas::QUIET_ZONE;
    use crate::models::Version;

    fn drawn(number: u8) -> Canvas {
        let mut canvas = Canvas::new(Version::new(number).unwrap(), QUIET_ZONE);
        draw_function_patterns(&mut canvas, ECLevel::M);
        canvas
    }

    fn unreserved(canvas: &Canvas) -> usize {
        let size = canvas.size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| !canvas.is_reserved(x, y))
            .count()
    }

    #[test]
    fn test_data_module_count_matches_tables() {
        for number in [1, 2, 6, 7, 14, 21, 32, 40] {
            let canvas = drawn(number);
            assert_eq!(unreserved(&canvas), raw_data_modules(number), "v{number}");
        }
    }

    #[test]
    fn test_finder_pattern_shape() {
        let canvas = drawn(1);
        let size = canvas.size();
        for (ox, oy) in [(0, 0), (size - 7, 0), (0, size - 7)] {
            for dy in 0..7 {
                for dx in 0..7 {
                    let ring = dx.min(dy).min(6 - dx).min(6 - dy);
                    assert_eq!(canvas.is_dark(ox + dx, oy + dy), ring != 1);
                }
            }
        }
        // Separator
        assert!(!canvas.is_dark(7, 0));
        assert!(canvas.is_reserved(7, 7));
    }

    #[test]
    fn test_timing_and_dark_module() {
        let canvas = drawn(2);
        let size = canvas.size();
        for i in 8..size - 8 {
            assert_eq!(canvas.is_dark(i, 6), i % 2 == 0);
            assert_eq!(canvas.is_dark(6, i), i % 2 == 0);
        }
        assert!(canvas.is_dark(8, size - 8));
    }

    #[test]
    fn test_alignment_pattern_v2() {
        let canvas = drawn(2);
        assert!(canvas.is_dark(18, 18));
        assert!(!canvas.is_dark(17, 18));
        assert!(canvas.is_dark(16, 16));
        assert!(canvas.is_reserved(20, 20));
        assert!(!canvas.is_reserved(21, 21));
    }

    #[test]
    fn test_version_info_blocks_mirror() {
        let canvas = drawn(7);
        let size = canvas.size();
        let bits = version_info_bits(7).unwrap();
        for i in 0..18 {
            let expected = (bits >> i) & 1 != 0;
            assert_eq!(canvas.is_dark(size - 11 + i % 3, i / 3), expected);
            assert_eq!(canvas.is_dark(i / 3, size - 11 + i % 3), expected);
        }
        // No version block below version 7.
        assert!(!drawn(6).is_reserved(41 - 11, 0));
    }

    #[test]
    fn test_format_info_redraw() {
        let mut canvas = drawn(1);
        draw_format_info(&mut canvas, ECLevel::L, MaskPattern::Pattern0);
        // 0x77C4 = 111011111000100, bit 14 first
        let bits = 0x77C4u16;
        assert_eq!(canvas.is_dark(0, 8), (bits >> 14) & 1 != 0);
        assert_eq!(canvas.is_dark(8, 0), bits & 1 != 0);
        let size = canvas.size();
        assert_eq!(canvas.is_dark(size - 1, 8), bits & 1 != 0);
        assert_eq!(canvas.is_dark(8, size - 1), (bits >> 14) & 1 != 0);
    }
}
