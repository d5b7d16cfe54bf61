//! Renderers for finished symbols and the profile card
//!
//! - Raster QR images (PNG, data URLs)
//! - Terminal QR output using half-block characters
//! - SVG profile card with wrapped text and a round avatar

/// SVG profile card
pub mod card;
/// Pixel rendering of QR symbols
pub mod raster;
/// Terminal rendering of QR symbols
pub mod terminal;
/// Approximate text measurement and wrapping
pub mod text;

use thiserror::Error;

pub use card::ProfileCard;
pub use raster::{Palette, QrLayout, render_qr_image, save_qr_png};
pub use terminal::render_terminal;

/// Failures while rendering or writing images
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("QR symbol has not been built; call make() first")]
    NotMade,
    #[error("a {size}px canvas cannot hold {modules} modules")]
    CanvasTooSmall { size: u32, modules: usize },
    #[error("pixel buffer does not match a {0}x{0} canvas")]
    Buffer(u32),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
