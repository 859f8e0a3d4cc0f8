/// Packed bit grid
pub mod matrix;
/// Version, level, mask and mode types
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, Mode, Version};
