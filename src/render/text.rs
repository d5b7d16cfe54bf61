/// Width of rendered text in pixels
pub trait TextMeasure {
    fn width(&self, text: &str, font_px: f32) -> f32;
}

/// Fixed per-glyph advances in em units: one for narrow glyphs, one for
/// full-width CJK glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproxMetrics {
    pub narrow: f32,
    pub wide: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self {
            narrow: 0.55,
            wide: 1.0,
        }
    }
}

impl TextMeasure for ApproxMetrics {
    fn width(&self, text: &str, font_px: f32) -> f32 {
        text.chars()
            .map(|c| if is_wide(c) { self.wide } else { self.narrow })
            .sum::<f32>()
            * font_px
    }
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x20000..=0x3FFFD
    )
}

/// Greedy line wrapping.
///
/// Text containing spaces wraps between words; text without spaces (such
/// as Chinese) wraps between characters. A single token wider than
/// `max_width` still gets its own line.
pub fn wrap_text(text: &str, max_width: f32, font_px: f32, measure: &impl TextMeasure) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let (tokens, separator): (Vec<String>, &str) = if text.contains(' ') {
        (text.split(' ').map(str::to_owned).collect(), " ")
    } else {
        (text.chars().map(String::from).collect(), "")
    };

    let mut lines = Vec::new();
    let mut line = String::new();
    for token in tokens {
        if line.is_empty() {
            line = token;
            continue;
        }
        let candidate = format!("{line}{separator}{token}");
        if measure.width(&candidate, font_px) > max_width {
            lines.push(std::mem::replace(&mut line, token));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every glyph is exactly one font size wide
    struct Monospace;

    impl TextMeasure for Monospace {
        fn width(&self, text: &str, font_px: f32) -> f32 {
            text.chars().count() as f32 * font_px
        }
    }

    #[test]
    fn test_wraps_on_words() {
        let lines = wrap_text("aa bb cc dd", 5.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_wraps_per_character_without_spaces() {
        let lines = wrap_text("学习日志记录", 4.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["学习日志", "记录"]);
    }

    #[test]
    fn test_long_word_kept_whole() {
        let lines = wrap_text("a supercalifragilistic b", 6.0, 1.0, &Monospace);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(wrap_text("", 100.0, 10.0, &Monospace).is_empty());
    }

    #[test]
    fn test_approx_metrics_wide_glyphs() {
        let metrics = ApproxMetrics::default();
        assert_eq!(metrics.width("知", 32.0), 32.0);
        assert!((metrics.width("ab", 10.0) - 11.0).abs() < 1e-4);
    }
}
