//! Shareable profile card
//!
//! The card is a 1080x1350 SVG: diagonal warm gradient, name, wrapped bio,
//! contact and social lines, and an optional round avatar embedded as a
//! PNG data URL.

use std::fmt::Write as _;
use std::path::Path;

use image::DynamicImage;
use image::imageops::FilterType;

use super::RenderError;
use super::raster::{encode_png, png_data_url};
use super::text::{ApproxMetrics, TextMeasure, wrap_text};
use crate::models::Profile;
use crate::site::search::escape_html;

pub const CARD_WIDTH: u32 = 1080;
pub const CARD_HEIGHT: u32 = 1350;

const GRADIENT_START: &str = "#f6b26b";
const GRADIENT_END: &str = "#f06c9b";
const INK: &str = "#1c0f13";

const LEFT: u32 = 80;
const NAME_Y: u32 = 160;
const BIO_Y: u32 = 240;
const BIO_MAX_WIDTH: f32 = 920.0;
const BIO_LINE_HEIGHT: u32 = 42;
const CONTACTS_Y: u32 = 400;
const SOCIALS_Y: u32 = 450;
const AVATAR_Y: u32 = 520;
const AVATAR_SIZE: u32 = 220;

/// Title drawn when the profile has no name
pub const FALLBACK_NAME: &str = "Zhi";

/// Typeface used by a card text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFont {
    /// Bold 72px sans, the name
    Title,
    /// 32px serif, the bio
    Body,
    /// 28px sans, contact and social lines
    Caption,
}

impl CardFont {
    pub fn size_px(self) -> u32 {
        match self {
            CardFont::Title => 72,
            CardFont::Body => 32,
            CardFont::Caption => 28,
        }
    }

    fn family(self) -> &'static str {
        match self {
            CardFont::Title | CardFont::Caption => "Space Grotesk, sans-serif",
            CardFont::Body => "Newsreader, serif",
        }
    }

    fn weight(self) -> &'static str {
        match self {
            CardFont::Title => "bold",
            CardFont::Body | CardFont::Caption => "normal",
        }
    }
}

/// One positioned line of text; `y` is the baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub font: CardFont,
}

/// Profile card builder
pub struct ProfileCard<'a> {
    profile: &'a Profile,
    avatar: Option<DynamicImage>,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            avatar: None,
        }
    }

    /// Use an already decoded avatar image
    pub fn with_avatar(mut self, avatar: DynamicImage) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Load the avatar from disk.
    ///
    /// A missing or unreadable avatar leaves the card without one, the same
    /// way a broken avatar link does not stop the card from rendering.
    pub fn with_avatar_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        match image::open(path) {
            Ok(avatar) => self.with_avatar(avatar),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "avatar skipped");
                self
            }
        }
    }

    pub fn has_avatar(&self) -> bool {
        self.avatar.is_some()
    }

    /// Text runs in drawing order
    pub fn layout(&self, measure: &impl TextMeasure) -> Vec<CardText> {
        let name = match self.profile.name.trim() {
            "" => FALLBACK_NAME,
            name => name,
        };
        let mut runs = vec![CardText {
            text: name.to_owned(),
            x: LEFT,
            y: NAME_Y,
            font: CardFont::Title,
        }];

        let body_px = CardFont::Body.size_px() as f32;
        let bio_lines = wrap_text(&self.profile.bio, BIO_MAX_WIDTH, body_px, measure);
        for (i, line) in bio_lines.into_iter().enumerate() {
            runs.push(CardText {
                text: line,
                x: LEFT,
                y: BIO_Y + i as u32 * BIO_LINE_HEIGHT,
                font: CardFont::Body,
            });
        }

        runs.push(CardText {
            text: format!("Contact: {}", self.profile.contacts_line()),
            x: LEFT,
            y: CONTACTS_Y,
            font: CardFont::Caption,
        });
        runs.push(CardText {
            text: format!("Social: {}", self.profile.socials_line()),
            x: LEFT,
            y: SOCIALS_Y,
            font: CardFont::Caption,
        });
        runs
    }

    /// Avatar scaled and cropped to a square, as a PNG data URL
    fn avatar_data_url(&self) -> Result<Option<String>, RenderError> {
        let Some(avatar) = &self.avatar else {
            return Ok(None);
        };
        let square = avatar
            .resize_to_fill(AVATAR_SIZE, AVATAR_SIZE, FilterType::Triangle)
            .to_rgb8();
        Ok(Some(png_data_url(&encode_png(&square)?)))
    }

    /// Render the card as an SVG document
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">"#
        )?;
        let radius = AVATAR_SIZE / 2;
        writeln!(
            svg,
            r#"<defs><linearGradient id="bg" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{CARD_WIDTH}" y2="{CARD_HEIGHT}"><stop offset="0" stop-color="{GRADIENT_START}"/><stop offset="1" stop-color="{GRADIENT_END}"/></linearGradient><clipPath id="avatar"><circle cx="{cx}" cy="{cy}" r="{radius}"/></clipPath></defs>"#,
            cx = LEFT + radius,
            cy = AVATAR_Y + radius,
        )?;
        writeln!(
            svg,
            r#"<rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="url(#bg)"/>"#
        )?;

        for run in self.layout(&ApproxMetrics::default()) {
            writeln!(
                svg,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{INK}">{}</text>"#,
                run.x,
                run.y,
                run.font.family(),
                run.font.size_px(),
                run.font.weight(),
                escape_html(&run.text),
            )?;
        }

        if let Some(url) = self.avatar_data_url()? {
            writeln!(
                svg,
                r#"<image href="{url}" x="{LEFT}" y="{AVATAR_Y}" width="{AVATAR_SIZE}" height="{AVATAR_SIZE}" clip-path="url(#avatar)"/>"#
            )?;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Write the SVG document to `path`
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_svg()?)?;
        tracing::info!(event = "card_download", path = %path.display(), "profile card saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Social};
    use image::{Rgb, RgbImage};

    fn profile() -> Profile {
        Profile {
            name: "Zhi <dev>".to_owned(),
            avatar: String::new(),
            bio: "Builds small tools and writes about what they learn along the way, \
                  one log entry at a time, mostly about Rust and the web."
                .to_owned(),
            contacts: vec![Contact {
                kind: "Email".to_owned(),
                value: "zhi@example.com".to_owned(),
            }],
            socials: vec![Social {
                label: "GitHub".to_owned(),
                url: None,
            }],
        }
    }

    #[test]
    fn test_layout_positions() {
        let profile = profile();
        let card = ProfileCard::new(&profile);
        let runs = card.layout(&ApproxMetrics::default());

        assert_eq!(runs[0].font, CardFont::Title);
        assert_eq!((runs[0].x, runs[0].y), (80, 160));

        let bio: Vec<&CardText> = runs.iter().filter(|r| r.font == CardFont::Body).collect();
        assert!(bio.len() >= 2, "long bio wraps");
        assert_eq!(bio[0].y, 240);
        assert_eq!(bio[1].y, 282);

        let captions: Vec<&CardText> =
            runs.iter().filter(|r| r.font == CardFont::Caption).collect();
        assert_eq!(captions[0].text, "Contact: Email zhi@example.com");
        assert_eq!(captions[0].y, 400);
        assert_eq!(captions[1].text, "Social: GitHub");
        assert_eq!(captions[1].y, 450);
    }

    #[test]
    fn test_empty_name_uses_fallback() {
        let mut profile = profile();
        profile.name = "  ".to_owned();
        let card = ProfileCard::new(&profile);
        let runs = card.layout(&ApproxMetrics::default());
        assert_eq!(runs[0].text, FALLBACK_NAME);
        assert_eq!(runs[0].font, CardFont::Title);
        assert_eq!((runs[0].x, runs[0].y), (80, 160));
        let svg = card.to_svg().expect("renders");
        assert!(svg.contains(">Zhi</text>"));
    }

    #[test]
    fn test_save_svg_writes_document() {
        let profile = profile();
        let path = std::env::temp_dir().join(format!("card-{}.svg", std::process::id()));
        ProfileCard::new(&profile).save_svg(&path).expect("saved");
        let written = std::fs::read_to_string(&path).expect("readable");
        let _ = std::fs::remove_file(&path);
        assert!(written.starts_with("<svg"));
        assert!(written.ends_with("</svg>\n"));
    }

    #[test]
    fn test_svg_escapes_text() {
        let profile = profile();
        let svg = ProfileCard::new(&profile).to_svg().expect("renders");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Zhi &lt;dev&gt;"));
        assert!(svg.contains(GRADIENT_START));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_svg_embeds_avatar() {
        let profile = profile();
        let avatar = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 300, Rgb([200, 10, 10])));
        let card = ProfileCard::new(&profile).with_avatar(avatar);
        assert!(card.has_avatar());
        let svg = card.to_svg().expect("renders");
        assert!(svg.contains(r#"<image href="data:image/png;base64,"#));
        assert!(svg.contains(r#"clip-path="url(#avatar)""#));
        assert!(svg.contains(r#"<circle cx="190" cy="630" r="110"/>"#));
    }

    #[test]
    fn test_missing_avatar_file_is_skipped() {
        let profile = profile();
        let card = ProfileCard::new(&profile).with_avatar_file("/nonexistent/avatar.png");
        assert!(!card.has_avatar());
    }
}
