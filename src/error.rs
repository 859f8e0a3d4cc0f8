use crate::models::{ECLevel, Mode};

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, QrError>;

/// Errors that can occur while building a symbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// No version 1-40 holds the payload at the requested level
    #[error("payload of {bits} bits exceeds the capacity of version 40 at level {level}")]
    CapacityExceeded {
        /// Bits the payload needs at version 40
        bits: usize,
        /// Requested correction level
        level: ECLevel,
    },

    /// A character outside the alphabet of the requested mode
    #[error("character {ch:?} at position {position} cannot be encoded in {mode} mode")]
    InvalidCharacter {
        /// Offending character
        ch: char,
        /// Character index in the input
        position: usize,
        /// Mode that rejected it
        mode: Mode,
    },

    /// The specification tables have no entry for this combination
    #[error("no table entry for version {version} at level {level}")]
    TableLookup {
        /// Version number looked up
        version: u8,
        /// Correction level looked up
        level: ECLevel,
    },

    /// A correction length outside the generator table
    #[error("invalid correction length: {0} (must be in [1, 30])")]
    InvalidEccLength(usize),

    /// Version number outside 1-40
    #[error("invalid version: {0} (must be in [1, 40])")]
    InvalidVersion(u8),

    /// Mask index outside 0-7
    #[error("invalid mask pattern: {0} (must be in [0, 8))")]
    InvalidMask(u8),
}
