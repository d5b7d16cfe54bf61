use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbImage};
use rayon::prelude::*;

use super::RenderError;
use crate::encoder::QrEncoder;

/// Colors for dark and light modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: [u8; 3],
    pub light: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: [0x11, 0x11, 0x11],
            light: [0xff, 0xff, 0xff],
        }
    }
}

/// Pixel geometry of a symbol drawn on a square canvas.
///
/// Modules get the largest whole-pixel size that fits; the leftover is
/// split evenly into a margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrLayout {
    pub size: u32,
    pub modules: u32,
    pub cell: u32,
    pub margin: u32,
}

impl QrLayout {
    pub fn new(module_count: usize, size: u32) -> Result<Self, RenderError> {
        if module_count == 0 {
            return Err(RenderError::NotMade);
        }
        let modules = module_count as u32;
        let cell = size / modules;
        if cell == 0 {
            return Err(RenderError::CanvasTooSmall {
                size,
                modules: module_count,
            });
        }
        Ok(Self {
            size,
            modules,
            cell,
            margin: (size - cell * modules) / 2,
        })
    }

    /// Module (row, col) covering pixel (x, y); `None` inside the margin
    pub fn module_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        let extent = self.cell * self.modules;
        let dx = x.checked_sub(self.margin)?;
        let dy = y.checked_sub(self.margin)?;
        if dx >= extent || dy >= extent {
            return None;
        }
        Some(((dy / self.cell) as usize, (dx / self.cell) as usize))
    }
}

/// Draw a built symbol onto a `size` x `size` RGB canvas
pub fn render_qr_image(qr: &QrEncoder, size: u32, palette: Palette) -> Result<RgbImage, RenderError> {
    let grid = qr.grid().ok_or(RenderError::NotMade)?;
    let layout = QrLayout::new(grid.size(), size)?;
    let width = size as usize;
    let mut pixels = vec![0u8; width * width * 3];

    // Process rows in parallel
    pixels.par_chunks_mut(width * 3).enumerate().for_each(|(y, row)| {
        for x in 0..width {
            let dark = layout
                .module_at(x as u32, y as u32)
                .is_some_and(|(r, c)| grid.is_dark(r, c));
            let color = if dark { palette.dark } else { palette.light };
            row[x * 3..x * 3 + 3].copy_from_slice(&color);
        }
    });

    tracing::debug!(size, cell = layout.cell, margin = layout.margin, "QR rendered");
    RgbImage::from_raw(size, size, pixels).ok_or(RenderError::Buffer(size))
}

/// Render and write a PNG file
pub fn save_qr_png<P: AsRef<Path>>(
    qr: &QrEncoder,
    size: u32,
    palette: Palette,
    path: P,
) -> Result<(), RenderError> {
    let image = render_qr_image(qr, size, palette)?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// `data:image/png;base64,...` URL for PNG bytes
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ECLevel;

    fn hello() -> QrEncoder {
        let mut qr = QrEncoder::new(ECLevel::M);
        qr.add_data("HELLO");
        qr.make().expect("fits");
        qr
    }

    #[test]
    fn test_layout_220_for_version_1() {
        let layout = QrLayout::new(21, 220).expect("fits");
        assert_eq!(layout.cell, 10);
        assert_eq!(layout.margin, 5);
        assert_eq!(layout.module_at(4, 4), None);
        assert_eq!(layout.module_at(5, 5), Some((0, 0)));
        assert_eq!(layout.module_at(16, 5), Some((0, 1)));
        assert_eq!(layout.module_at(214, 214), Some((20, 20)));
        assert_eq!(layout.module_at(215, 215), None);
    }

    #[test]
    fn test_layout_rejects_tiny_canvas() {
        assert!(matches!(
            QrLayout::new(21, 20),
            Err(RenderError::CanvasTooSmall { size: 20, modules: 21 })
        ));
        assert!(matches!(QrLayout::new(0, 220), Err(RenderError::NotMade)));
    }

    #[test]
    fn test_render_matches_modules() {
        let qr = hello();
        let image = render_qr_image(&qr, 220, Palette::default()).expect("renders");
        assert_eq!(image.dimensions(), (220, 220));
        // Margin is light, top-left finder corner is dark
        assert_eq!(image.get_pixel(0, 0).0, [0xff, 0xff, 0xff]);
        assert_eq!(image.get_pixel(5, 5).0, [0x11, 0x11, 0x11]);
        // Module (1, 1) is inside the finder's light ring
        assert_eq!(image.get_pixel(15, 15).0, [0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_render_requires_make() {
        let qr = QrEncoder::new(ECLevel::M);
        assert!(matches!(
            render_qr_image(&qr, 220, Palette::default()),
            Err(RenderError::NotMade)
        ));
    }

    #[test]
    fn test_png_data_url() {
        let qr = hello();
        let image = render_qr_image(&qr, 64, Palette::default()).expect("renders");
        let png = encode_png(&image).expect("encodes");
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        assert!(png_data_url(&png).starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
