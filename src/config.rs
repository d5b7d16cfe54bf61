//! Environment-driven defaults, read once per process

use std::path::PathBuf;
use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_string(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Default QR canvas side in pixels
pub const DEFAULT_QR_SIZE: u32 = 220;

static QR_SIZE: OnceLock<u32> = OnceLock::new();

/// QR canvas side from `HOME_QR_SIZE`, clamped to 64..=2048
pub fn qr_size() -> u32 {
    *QR_SIZE.get_or_init(|| parse_env_u32("HOME_QR_SIZE", DEFAULT_QR_SIZE).clamp(64, 2048))
}

static DATA_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Directory holding `profile.json`, `tools.json` and `logs.json`
pub fn data_root() -> PathBuf {
    DATA_ROOT
        .get_or_init(|| PathBuf::from(parse_env_string("HOME_DATA_ROOT", "public/data")))
        .clone()
}

static SITE_URL: OnceLock<String> = OnceLock::new();

/// Public page URL used for share links and QR codes
pub fn site_url() -> &'static str {
    SITE_URL.get_or_init(|| parse_env_string("HOME_SITE_URL", "http://localhost:4321/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_fallbacks() {
        assert_eq!(parse_env_u32("HOME_QR_TEST_UNSET_VARIABLE", 7), 7);
        assert_eq!(parse_env_string("HOME_QR_TEST_UNSET_VARIABLE", "x"), "x");
    }

    #[test]
    fn test_qr_size_in_range() {
        let size = qr_size();
        assert!((64..=2048).contains(&size));
    }
}
