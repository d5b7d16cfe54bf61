//! QR code encoding modules
//!
//! Byte-mode encoder producing versions 1-9:
//! - Bit stream construction (mode, count, payload, padding)
//! - Reed-Solomon error correction over GF(256)
//! - Function pattern placement (finder, timing, alignment)
//! - Zigzag codeword placement

/// Append-only MSB-first bit buffer
pub mod bit_buffer;
pub mod error;
/// Finder, timing and alignment patterns
pub mod patterns;
/// Zigzag codeword placement
pub mod placement;
/// Encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Byte mode segments
pub mod segment;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;

pub use error::EncodeError;
pub use qr_encoder::QrEncoder;
