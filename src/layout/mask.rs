/// Mask application for data modules
use crate::models::MaskPattern;

/// XOR a data bit with the mask predicate at data-area column `x`, row `y`.
/// Applying the same mask twice restores the bit.
#[inline]
pub fn apply_mask(mask: MaskPattern, bit: bool, x: usize, y: usize) -> bool {
    bit ^ mask.is_masked(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_mask_involution() {
        for mask in MaskPattern::ALL {
            for y in 0..30 {
                for x in 0..30 {
                    for bit in [false, true] {
                        assert_eq!(apply_mask(mask, apply_mask(mask, bit, x, y), x, y), bit);
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_mask_flips_where_predicate_holds() {
        // Pattern0: (x + y) % 2 == 0
        assert!(apply_mask(MaskPattern::Pattern0, false, 10, 10));
        assert!(!apply_mask(MaskPattern::Pattern0, false, 11, 10));
        assert!(!apply_mask(MaskPattern::Pattern0, true, 10, 10));
    }
}
