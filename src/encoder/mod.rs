//! Data and error-correction encoding
//!
//! - Data modes and the bit stream with header and padding
//! - Reed-Solomon correction codewords and block interleaving
//! - BCH codewords for format and version information

/// BCH codes for format and version info
pub mod bch;
/// Bit stream assembly and version selection
pub mod bitstream;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// GF(256) arithmetic and Reed-Solomon encoding
pub mod reed_solomon;
/// QR specification tables (capacities, ECC blocks, alignment positions)
pub mod tables;
