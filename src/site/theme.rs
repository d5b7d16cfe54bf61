use std::fmt;
use std::str::FromStr;

/// Theme chosen by the visitor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

/// Concrete theme applied to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse a stored value; unknown or missing values mean `System`
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Switch to `next`. Returns true when the preference changed.
    pub fn switch_to(&mut self, next: ThemePreference) -> bool {
        if *self == next {
            return false;
        }
        tracing::info!(event = "theme_change", from = %self, to = %next, "theme changed");
        *self = next;
        true
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if system_prefers_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
