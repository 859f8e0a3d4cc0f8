//! Module grid construction
//!
//! Function patterns are drawn first and reserve their modules; codewords
//! then fill the remaining modules along the zigzag path, masked.

/// Module and reservation grids with the quiet zone margin
pub mod canvas;
/// Finder, timing, alignment, version and format patterns
pub mod function_patterns;
/// Mask application for data modules
pub mod mask;
/// Mask penalty scoring
pub mod penalty;
/// Zigzag codeword placement
pub mod placement;

pub use canvas::{Canvas, QUIET_ZONE};

use crate::models::{ECLevel, MaskPattern, Version};

/// Build the complete grid for final codewords under one mask
pub fn build_canvas(
    version: Version,
    level: ECLevel,
    codewords: &[u8],
    mask: MaskPattern,
) -> Canvas {
    let mut canvas = Canvas::new(version, QUIET_ZONE);
    function_patterns::draw_function_patterns(&mut canvas, level);
    placement::place_codewords(&mut canvas, codewords, mask);
    function_patterns::draw_format_info(&mut canvas, level, mask);
    canvas
}
