//! homepage_qr - QR encoding and view logic for a personal homepage
//!
//! A byte-mode QR encoder (versions 1-9, full Reed-Solomon error
//! correction) plus the pieces the homepage builds on top of it: PNG and
//! terminal renderers, a shareable SVG profile card, and the tool-search,
//! learning-log and theme state derived from the site's JSON data.

/// Environment-driven defaults
pub mod config;
/// QR code encoding (bit stream, error correction, placement)
pub mod encoder;
/// Core data structures (module grid, versions, site data model)
pub mod models;
/// QR and profile-card renderers
pub mod render;
/// Homepage section logic
pub mod site;

pub use encoder::{EncodeError, QrEncoder};
pub use models::{ECLevel, Module, ModuleGrid, Version};

/// Encode `text` at the default error-correction level (M)
///
/// Returns a built encoder whose modules can be queried with
/// [`QrEncoder::is_dark`].
///
/// # Example
///
/// ```
/// let qr = homepage_qr::encode_text("HELLO").unwrap();
/// assert_eq!(qr.module_count(), 21);
/// ```
pub fn encode_text(text: &str) -> Result<QrEncoder, EncodeError> {
    encode_text_with_level(text, ECLevel::default())
}

/// Encode `text` at a chosen error-correction level
pub fn encode_text_with_level(text: &str, ec_level: ECLevel) -> Result<QrEncoder, EncodeError> {
    let mut encoder = QrEncoder::new(ec_level);
    encoder.add_data(text);
    encoder.make()?;
    Ok(encoder)
}
