use std::fmt;

use crate::config;
use crate::encoder::{EncodeError, QrEncoder};
use crate::models::ECLevel;

/// Link to the page, optionally pointing at a section or log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    base: String,
    anchor: Option<String>,
}

impl ShareLink {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().to_owned(),
            anchor: None,
        }
    }

    /// Link to the configured site URL
    pub fn from_config() -> Self {
        Self::new(config::site_url())
    }

    /// Point at `#anchor`, replacing any fragment already in the base URL
    pub fn with_anchor(mut self, anchor: &str) -> Self {
        let anchor = anchor.trim().trim_start_matches('#');
        self.anchor = (!anchor.is_empty()).then(|| anchor.to_owned());
        self
    }

    pub fn url(&self) -> String {
        let base = self.base.split('#').next().unwrap_or_default();
        match &self.anchor {
            Some(anchor) => format!("{base}#{anchor}"),
            None => self.base.clone(),
        }
    }

    /// Built QR symbol carrying the URL
    pub fn qr(&self, ec_level: ECLevel) -> Result<QrEncoder, EncodeError> {
        let mut encoder = QrEncoder::new(ec_level);
        encoder.add_data(&self.url());
        encoder.make()?;
        Ok(encoder)
    }
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
