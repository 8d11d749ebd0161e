//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents; three are built in and a custom one can be loaded
//! with the `theme_file` configuration key.
//!
//! # Built-in Themes
//!
//! - `tgvmax`: TGV Max brand colours on dark blue (default)
//! - `catppuccin-mocha`: Dark theme with warm tones
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#ffffff"
//! header_bg = "#002b5c"      # optional
//! selection_fg = "#ffffff"
//! selection_bg = "#00b2e3"
//! text_normal = "#f6f6f6"
//! text_dim = "#8a94a6"
//! border = "#3d4b63"
//! label_fg = "#00b2e3"
//! checked_fg = "#7bd88f"
//! disabled_fg = "#5c6370"
//! empty_state_fg = "#00b2e3"
//! status_fg = "#ffd166"
//! ```
//!
//! # Example
//!
//! ```rust
//! use tgvmax::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! print!("{}Results{}", Theme::fg(&theme.colors.label_fg), Theme::reset());
//! ```

use crate::domain::error::{Result, TgvMaxError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing is configured.
pub const DEFAULT_THEME: &str = "tgvmax";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colours of every UI element, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar and table header text.
    pub header_fg: String,
    /// Title bar background; transparent when absent.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Focused field / cursor foreground.
    pub selection_fg: String,
    /// Focused field / cursor background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, hints and placeholders.
    pub text_dim: String,

    pub border: String,

    /// Form labels and panel titles.
    pub label_fg: String,
    /// Ticked checkbox marks.
    pub checked_fg: String,
    /// Fields or pager hints that cannot be used right now.
    pub disabled_fg: String,

    /// "No trips found" placeholder.
    pub empty_state_fg: String,

    /// Status line.
    pub status_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "tgvmax" => include_str!("../../themes/tgvmax.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TgvMaxError::Io`] if the file cannot be read and
    /// [`TgvMaxError::Theme`] if it is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents).map_err(|e| TgvMaxError::Theme(format!("invalid theme TOML: {e}")))
    }

    /// Parses `#rrggbb`; anything else renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground sequence for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The `tgvmax` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("bundled tgvmax theme should always parse")
    }
}
