//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in palettes, light and dark, are embedded from TOML files. Each
//! palette carries the chrome colors and one color per mood. Hex colors are
//! turned into 24-bit ANSI escape sequences at render time; with color
//! disabled every escape helper returns an empty string.
//!
//! # TOML Format
//!
//! ```toml
//! name = "dark"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! accent = "#f5c2e7"
//! calendar_empty = "#313244"
//!
//! [colors.moods]
//! amazing = "#a6e3a1"
//! good = "#94e2d5"
//! neutral = "#f9e2af"
//! stressed = "#fab387"
//! terrible = "#f38ba8"
//! ```

use crate::domain::error::JournalError;
use crate::domain::Mood;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DARK_TOML: &str = include_str!("../../themes/dark.toml");
const LIGHT_TOML: &str = include_str!("../../themes/light.toml");

/// Persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(JournalError::Theme(format!("unknown theme '{other}', expected light or dark"))),
        }
    }
}

/// Color scheme used by the renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
    /// Whether escape sequences are emitted at all.
    #[serde(skip, default = "color_on")]
    pub color: bool,
}

const fn color_on() -> bool {
    true
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    pub text_normal: String,
    /// Secondary info (timestamps, ids, subtitles).
    pub text_dim: String,
    pub border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,
    pub empty_state_fg: String,
    /// Stat values and chart bars without a mood.
    pub accent: String,
    /// Calendar cell for a day without entries.
    pub calendar_empty: String,
    pub moods: MoodColors,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoodColors {
    pub amazing: String,
    pub good: String,
    pub neutral: String,
    pub stressed: String,
    pub terrible: String,
}

impl MoodColors {
    #[must_use]
    pub fn get(&self, mood: Mood) -> &str {
        match mood {
            Mood::Amazing => &self.amazing,
            Mood::Good => &self.good,
            Mood::Neutral => &self.neutral,
            Mood::Stressed => &self.stressed,
            Mood::Terrible => &self.terrible,
        }
    }
}

impl Theme {
    /// Loads the built-in palette for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Theme`] if the embedded TOML fails to parse.
    pub fn for_mode(mode: ThemeMode) -> Result<Self, JournalError> {
        let toml_str = match mode {
            ThemeMode::Light => LIGHT_TOML,
            ThemeMode::Dark => DARK_TOML,
        };

        toml::from_str(toml_str).map_err(|e| JournalError::Theme(format!("failed to parse {mode} palette: {e}")))
    }

    /// Same palette with escape sequences switched on or off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence, `\x1b[38;2;r;g;bm`.
    #[must_use]
    pub fn fg(&self, hex: &str) -> String {
        if !self.color {
            return String::new();
        }
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence, `\x1b[48;2;r;g;bm`.
    #[must_use]
    pub fn bg(&self, hex: &str) -> String {
        if !self.color {
            return String::new();
        }
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub fn mood_fg(&self, mood: Mood) -> String {
        self.fg(self.colors.moods.get(mood))
    }

    #[must_use]
    pub const fn bold(&self) -> &'static str {
        if self.color {
            "\u{001b}[1m"
        } else {
            ""
        }
    }

    #[must_use]
    pub const fn dim(&self) -> &'static str {
        if self.color {
            "\u{001b}[2m"
        } else {
            ""
        }
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset(&self) -> &'static str {
        if self.color {
            "\u{001b}[0m"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_palettes_parse() {
        let dark = Theme::for_mode(ThemeMode::Dark).unwrap();
        let light = Theme::for_mode(ThemeMode::Light).unwrap();
        assert_eq!(dark.name, "dark");
        assert_eq!(light.name, "light");
        assert_ne!(dark.colors.moods.get(Mood::Good), light.colors.moods.get(Mood::Good));
    }

    #[test]
    fn escapes_follow_color_flag() {
        let theme = Theme::for_mode(ThemeMode::Dark).unwrap();
        assert_eq!(theme.fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(theme.bg("#00ff00"), "\u{001b}[48;2;0;255;0m");

        let plain = theme.with_color(false);
        assert!(plain.fg("#ff0000").is_empty());
        assert!(plain.reset().is_empty());
    }

    #[test]
    fn mode_parse_and_toggle() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert!(matches!("sepia".parse::<ThemeMode>(), Err(JournalError::Theme(_))));
    }
}
