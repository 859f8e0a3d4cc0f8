//! Symbol construction and text rendering
//!
//! A [`Symbol`] runs the whole pipeline once: data encoding, Reed-Solomon
//! interleaving, function patterns, codeword placement and mask selection.
//! It is immutable afterwards; rendering only reads the finished grid.

use std::fmt;

use rayon::prelude::*;

use crate::config;
use crate::debug::debug_log;
use crate::encoder::{bitstream, reed_solomon};
use crate::error::Result;
use crate::layout::function_patterns::PLACEHOLDER_MASK;
use crate::layout::penalty::penalty_score;
use crate::layout::{Canvas, build_canvas};
use crate::models::{BitMatrix, ECLevel, MaskPattern, Mode, Version};

const DARK: &str = "██";
const LIGHT: &str = "  ";
const RESERVED_LIGHT: &str = "░░";
const REMAINDER_LABEL: &str = "--";

/// How the mask of a symbol is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskSelection {
    /// Lowest penalty over all eight patterns, lowest index on ties
    #[default]
    Auto,
    /// Always use this pattern
    Fixed(MaskPattern),
}

/// Construction options for [`Symbol`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolOptions {
    /// Data mode; `None` picks the narrowest mode that accepts the text
    pub mode: Option<Mode>,
    /// Error correction level
    pub level: ECLevel,
    /// Mask choice
    pub mask: MaskSelection,
    /// Marks reserved light modules when the symbol is displayed
    pub debug: bool,
}

impl Default for SymbolOptions {
    fn default() -> Self {
        Self {
            mode: None,
            level: ECLevel::M,
            mask: MaskSelection::Auto,
            debug: false,
        }
    }
}

impl SymbolOptions {
    /// Force a data mode instead of detecting one
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the error correction level
    pub fn level(mut self, level: ECLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the mask selection
    pub fn mask(mut self, mask: MaskSelection) -> Self {
        self.mask = mask;
        self
    }

    /// Use the debug glyphs when displayed
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Encode `text` with these options
    pub fn build(&self, text: &str) -> Result<Symbol> {
        Symbol::with_options(text, self)
    }
}

/// Text rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Render reserved light modules (quiet zone, separators, ...) as `░░`
    pub debug: bool,
    /// Show the codeword index carried by each data module instead of its colour
    pub codeword_labels: bool,
}

/// A finished QR code symbol
#[derive(Debug, Clone)]
pub struct Symbol {
    text: String,
    mode: Mode,
    level: ECLevel,
    version: Version,
    mask: MaskPattern,
    penalty: u32,
    data_codewords: Vec<u8>,
    codewords: Vec<u8>,
    canvas: Canvas,
    debug: bool,
}

impl Symbol {
    /// Encode `text` in `mode` at `level`, selecting the mask automatically
    pub fn new(text: &str, mode: Mode, level: ECLevel) -> Result<Self> {
        Self::with_options(text, &SymbolOptions::default().mode(mode).level(level))
    }

    /// Default options, to be refined and then built
    pub fn builder() -> SymbolOptions {
        SymbolOptions::default()
    }

    /// Encode `text` with explicit options
    pub fn with_options(text: &str, options: &SymbolOptions) -> Result<Self> {
        let mode = options.mode.unwrap_or_else(|| Mode::detect(text));
        let level = options.level;
        let encoded = bitstream::encode(text, mode, level)?;
        let version = encoded.version;
        let codewords = reed_solomon::compute(&encoded.codewords, version, level)?;

        let fixed = match options.mask {
            MaskSelection::Fixed(mask) => Some(mask),
            MaskSelection::Auto => config::default_mask_override(),
        };
        let (mask, penalty, canvas) = match fixed {
            Some(mask) => score_mask(version, level, &codewords, mask),
            None => {
                let parallel = config::parallel_mask_search();
                best_candidate(evaluate_masks(version, level, &codewords, parallel))
                    .unwrap_or_else(|| score_mask(version, level, &codewords, PLACEHOLDER_MASK))
            }
        };

        debug_log!(
            "symbol v{}-{} {}: mask {} (penalty {})",
            version,
            level,
            mode,
            mask,
            penalty
        );

        Ok(Self {
            text: text.to_string(),
            mode,
            level,
            version,
            mask,
            penalty,
            data_codewords: encoded.codewords,
            codewords,
            canvas,
            debug: options.debug,
        })
    }

    /// Encoded text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Data mode used
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Error correction level
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Smallest version that holds the text
    pub fn version(&self) -> Version {
        self.version
    }

    /// Mask applied to the data modules
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Penalty score of the final grid
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Data codewords before error correction
    pub fn data_codewords(&self) -> &[u8] {
        &self.data_codewords
    }

    /// Interleaved data and correction codewords, in placement order
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    /// Side of the data area in modules
    pub fn size(&self) -> usize {
        self.canvas.size()
    }

    /// Side of the full grid, quiet zone included
    pub fn width(&self) -> usize {
        self.canvas.width()
    }

    /// Quiet zone width on each side
    pub fn margin(&self) -> usize {
        self.canvas.margin()
    }

    /// Module colour at a data-area coordinate (x = column, y = row)
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.canvas.is_dark(x, y)
    }

    /// Whether a data-area module belongs to a function pattern
    pub fn is_function_module(&self, x: usize, y: usize) -> bool {
        self.canvas.is_reserved(x, y)
    }

    /// Full grid including the quiet zone (true = dark)
    pub fn modules(&self) -> &BitMatrix {
        self.canvas.modules()
    }

    /// Penalty of every mask pattern over this symbol's codewords, in mask order
    pub fn mask_penalties(&self) -> Vec<(MaskPattern, u32)> {
        evaluate_masks(
            self.version,
            self.level,
            &self.codewords,
            config::parallel_mask_search(),
        )
        .into_iter()
        .map(|(mask, penalty, _)| (mask, penalty))
        .collect()
    }

    /// Render as text, one line per row, two characters per module
    pub fn render(&self, options: &RenderOptions) -> String {
        let width = self.canvas.width();
        let modules = self.canvas.modules();
        let reserved = self.canvas.reserved();
        let mut out = String::with_capacity(width * (width * 2 * 3 + 1));

        for fy in 0..width {
            for fx in 0..width {
                let label = if options.codeword_labels {
                    self.canvas.label(fx, fy)
                } else {
                    None
                };
                if let Some(index) = label {
                    if (index as usize) < self.codewords.len() {
                        out.push_str(&format!("{:2}", index % 100));
                    } else {
                        out.push_str(REMAINDER_LABEL);
                    }
                    continue;
                }
                let glyph = if modules.get(fx, fy) {
                    DARK
                } else if options.debug && reserved.get(fx, fy) {
                    RESERVED_LIGHT
                } else {
                    LIGHT
                };
                out.push_str(glyph);
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions {
            debug: self.debug,
            codeword_labels: false,
        };
        f.write_str(&self.render(&options))
    }
}

/// A masked grid and its penalty
type Candidate = (MaskPattern, u32, Canvas);

fn score_mask(version: Version, level: ECLevel, codewords: &[u8], mask: MaskPattern) -> Candidate {
    let canvas = build_canvas(version, level, codewords, mask);
    (mask, penalty_score(&canvas), canvas)
}

/// Build every mask candidate from the same codewords and score it
fn evaluate_masks(
    version: Version,
    level: ECLevel,
    codewords: &[u8],
    parallel: bool,
) -> Vec<Candidate> {
    let score = |&mask: &MaskPattern| score_mask(version, level, codewords, mask);

    let candidates: Vec<Candidate> = if parallel {
        MaskPattern::ALL.par_iter().map(score).collect()
    } else {
        MaskPattern::ALL.iter().map(score).collect()
    };

    for (mask, penalty, _) in &candidates {
        debug_log!("mask {}: penalty {}", mask, penalty);
    }

    candidates
}

/// Lowest penalty, lowest mask index on ties
fn best_candidate(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .min_by_key(|(mask, penalty, _)| (*penalty, mask.index()))
}
