//! rust_qr_gen - QR code symbol encoder
//!
//! Turns text into a QR code (Model 2, versions 1-40) and renders it as a
//! module grid. The pipeline is:
//!
//! 1. Data encoding (numeric, alphanumeric or byte mode) into codewords
//!    for the smallest version that fits
//! 2. Reed-Solomon correction codewords, split into blocks and interleaved
//! 3. Function patterns, zigzag codeword placement and masking
//! 4. Mask selection by penalty score, evaluated in parallel
//!
//! ```no_run
//! use rust_qr_gen::{ECLevel, Mode, Symbol};
//!
//! let symbol = Symbol::new("HELLO WORLD", Mode::Alphanumeric, ECLevel::M)?;
//! println!("{symbol}");
//! # Ok::<(), rust_qr_gen::QrError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
mod debug;

/// Data encoding, Reed-Solomon and BCH codes, specification tables
pub mod encoder;
/// Error types
pub mod error;
/// Module grid construction (function patterns, placement, masks, penalty)
pub mod layout;
/// Core data structures (Version, ECLevel, MaskPattern, Mode, BitMatrix)
pub mod models;
/// The finished symbol and its text rendering
pub mod symbol;

pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Mode, Version};
pub use symbol::{MaskSelection, RenderOptions, Symbol, SymbolOptions};

/// Encode `text` in the narrowest mode that accepts it
///
/// # Arguments
/// * `text` - Content to encode
/// * `level` - Error correction level
///
/// # Returns
/// The finished symbol, or the first encoding error
pub fn encode(text: &str, level: ECLevel) -> Result<Symbol> {
    Symbol::builder().level(level).build(text)
}
