//! Theme management and stylesheet generation.
//!
//! This module defines the colour scheme system for the gallery, supporting both
//! built-in themes and custom themes loaded from TOML files. A theme only affects
//! presentation: [`Theme::stylesheet`] turns it into a CSS description scoped to
//! one widget instance, so two galleries on the same page never share or clobber
//! each other's styles.
//!
//! # Built-in Themes
//!
//! - `dark` (default), `light`, `ocean`, `sunset`, `forest`, `purple`: glossary looks
//! - `midnight`: the character-database look
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "linear-gradient(135deg, #1a1a2e 0%, #16213e 100%)"
//! text_primary = "#fff"
//! text_secondary = "#ccc"
//! card_bg = "#fff"
//! card_title = "#1a1a2e"
//! card_subtitle = "#666"
//! card_text = "#444"
//! hover_glow = "rgba(100,200,255,0.4)"
//! overlay_bg = "rgba(0,0,0,0.9)"
//! ```
//!
//! # Example
//!
//! ```rust
//! use cardgallery::ui::theme::{Theme, ThemeName};
//!
//! let theme = Theme::builtin(ThemeName::Ocean);
//! let css = theme.stylesheet("glossary-root");
//! assert!(css.contains("#glossary-root .cg-grid"));
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{GalleryError, Result};

/// Names of the built-in themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark navy gradient.
    #[default]
    Dark,
    /// Pale grey-blue gradient.
    Light,
    /// Deep teal gradient.
    Ocean,
    /// Pink gradient.
    Sunset,
    /// Green gradient.
    Forest,
    /// Purple to teal gradient.
    Purple,
    /// Flat near-black with blue accents.
    Midnight,
}

impl ThemeName {
    /// Every built-in theme, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Dark,
        Self::Light,
        Self::Ocean,
        Self::Sunset,
        Self::Forest,
        Self::Purple,
        Self::Midnight,
    ];

    /// Lowercase identifier used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Purple => "purple",
            Self::Midnight => "midnight",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Dark => include_str!("../../themes/dark.toml"),
            Self::Light => include_str!("../../themes/light.toml"),
            Self::Ocean => include_str!("../../themes/ocean.toml"),
            Self::Sunset => include_str!("../../themes/sunset.toml"),
            Self::Forest => include_str!("../../themes/forest.toml"),
            Self::Purple => include_str!("../../themes/purple.toml"),
            Self::Midnight => include_str!("../../themes/midnight.toml"),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| GalleryError::Theme(format!("unknown theme \"{s}\"")))
    }
}

/// Colour scheme for a gallery instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for all UI elements.
    pub colors: ThemeColors,
}

/// Colour definitions, as CSS values.
///
/// Any CSS colour or image expression is accepted (`background` is usually a
/// gradient).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background behind the grid.
    pub background: String,
    /// Heading, no-results and error text.
    pub text_primary: String,
    /// Page subtitle and stats line.
    pub text_secondary: String,
    /// Card background.
    pub card_bg: String,
    /// Card title.
    pub card_title: String,
    /// Card subtitle.
    pub card_subtitle: String,
    /// Card description.
    pub card_text: String,
    /// Glow used for hover and search focus.
    pub hover_glow: String,
    /// Overlay backdrop.
    pub overlay_bg: String,
}

/// Per-instance stylesheet. `@SCOPE@` is the widget root id, `@NAME@` tokens are
/// theme colours.
const STYLESHEET: &str = r"
#@SCOPE@ { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif; background: @BACKGROUND@; min-height: 100vh; padding: 20px; box-sizing: border-box; }
#@SCOPE@ * { box-sizing: border-box; }
#@SCOPE@ [hidden] { display: none !important; }
#@SCOPE@ .cg-title { text-align: center; color: @TEXT_PRIMARY@; margin: 0 0 25px; font-size: 2.2rem; font-weight: 700; text-shadow: 2px 2px 4px rgba(0,0,0,0.3); }
#@SCOPE@ .cg-subtitle { text-align: center; color: @TEXT_SECONDARY@; margin: -15px 0 30px; }
#@SCOPE@ .cg-search-box { max-width: 500px; margin: 0 auto 30px; position: relative; }
#@SCOPE@ .cg-search { width: 100%; padding: 15px 20px 15px 50px; font-size: 18px; border: none; border-radius: 30px; background: #fff; box-shadow: 0 4px 15px rgba(0,0,0,0.2); outline: none; transition: box-shadow 0.3s, transform 0.3s; }
#@SCOPE@ .cg-search:focus { box-shadow: 0 6px 25px @HOVER_GLOW@; transform: translateY(-2px); }
#@SCOPE@ .cg-search-icon { position: absolute; left: 18px; top: 50%; transform: translateY(-50%); font-size: 20px; opacity: 0.5; }
#@SCOPE@ .cg-stats { text-align: center; color: @TEXT_SECONDARY@; margin-bottom: 20px; font-size: 14px; }
#@SCOPE@ .cg-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 25px; max-width: 1400px; margin: 0 auto; padding: 10px; }
#@SCOPE@ .cg-card { background: @CARD_BG@; border-radius: 16px; text-align: center; box-shadow: 0 8px 25px rgba(0,0,0,0.15); transition: transform 0.3s ease, box-shadow 0.3s ease; position: relative; overflow: hidden; }
#@SCOPE@ .cg-card:hover { transform: translateY(-8px); box-shadow: 0 15px 40px @HOVER_GLOW@; }
#@SCOPE@ .cg-card--avatar { padding: 25px 20px; }
#@SCOPE@ .cg-card--avatar .cg-card-image { width: 130px; height: 130px; margin: 0 auto 18px; display: block; border-radius: 50%; object-fit: cover; cursor: pointer; border: 4px solid #f0f0f0; transition: transform 0.3s ease; }
#@SCOPE@ .cg-card--avatar .cg-card-image:hover { transform: scale(1.12); }
#@SCOPE@ .cg-card--poster { cursor: pointer; }
#@SCOPE@ .cg-card--poster .cg-card-image { width: 100%; height: 250px; object-fit: cover; display: block; }
#@SCOPE@ .cg-card--poster .cg-card-body { position: absolute; bottom: 0; left: 0; right: 0; padding: 2rem 1rem 1rem; background: linear-gradient(to top, rgba(0,0,0,0.9) 0%, rgba(0,0,0,0) 100%); }
#@SCOPE@ .cg-card-title { color: @CARD_TITLE@; margin-bottom: 6px; font-size: 1.25rem; font-weight: 700; }
#@SCOPE@ .cg-card-subtitle { color: @CARD_SUBTITLE@; font-size: 14px; margin-bottom: 12px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; }
#@SCOPE@ .cg-card-text { color: @CARD_TEXT@; font-size: 14px; line-height: 1.6; }
#@SCOPE@ .cg-no-results { text-align: center; color: @TEXT_PRIMARY@; font-size: 22px; padding: 60px 20px; }
#@SCOPE@ .cg-no-results-icon { font-size: 50px; margin-bottom: 15px; }
#@SCOPE@ .cg-error { color: red; text-align: center; padding: 2rem; }
#@SCOPE@ .cg-overlay { position: fixed; inset: 0; background: @OVERLAY_BG@; z-index: 10000; display: flex; justify-content: center; align-items: center; flex-direction: column; padding: 20px; backdrop-filter: blur(5px); }
#@SCOPE@ .cg-overlay-content { display: flex; flex-direction: column; align-items: center; max-width: 90%; }
#@SCOPE@ .cg-overlay-image { max-width: 90%; max-height: 55vh; border-radius: 12px; background: #fff; object-fit: contain; }
#@SCOPE@ .cg-overlay-title { color: #fff; font-size: 2rem; margin-top: 25px; font-weight: 700; }
#@SCOPE@ .cg-overlay-subtitle { color: #ccc; margin-top: 8px; font-size: 1.1rem; text-transform: uppercase; letter-spacing: 1px; }
#@SCOPE@ .cg-overlay-text { color: #bbb; margin-top: 15px; font-size: 15px; max-width: 600px; text-align: center; line-height: 1.7; }
#@SCOPE@ .cg-overlay-close { position: absolute; top: 20px; right: 30px; color: #fff; font-size: 45px; cursor: pointer; line-height: 1; background: none; border: none; }
@media (max-width: 768px) {
  #@SCOPE@ .cg-title { font-size: 1.6rem; }
  #@SCOPE@ .cg-grid { gap: 18px; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); }
  #@SCOPE@ .cg-card--avatar .cg-card-image { width: 100px; height: 100px; }
  #@SCOPE@ .cg-overlay-title { font-size: 1.5rem; }
}
";

impl Theme {
    /// Built-in theme names, as accepted by [`Theme::from_name`].
    pub const BUILT_IN: [&'static str; 7] = [
        "dark", "light", "ocean", "sunset", "forest", "purple", "midnight",
    ];

    /// Loads a built-in theme.
    ///
    /// # Panics
    ///
    /// Panics if an embedded theme file fails to parse (should never occur).
    #[must_use]
    pub fn builtin(name: ThemeName) -> Self {
        toml::from_str(name.source()).expect("built-in theme files should always parse")
    }

    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse::<ThemeName>().ok().map(Self::builtin)
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GalleryError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| GalleryError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves this theme into a stylesheet scoped to the element with id `scope`.
    #[must_use]
    pub fn stylesheet(&self, scope: &str) -> String {
        let c = &self.colors;
        STYLESHEET
            .replace("@SCOPE@", scope)
            .replace("@BACKGROUND@", &c.background)
            .replace("@TEXT_PRIMARY@", &c.text_primary)
            .replace("@TEXT_SECONDARY@", &c.text_secondary)
            .replace("@CARD_BG@", &c.card_bg)
            .replace("@CARD_TITLE@", &c.card_title)
            .replace("@CARD_SUBTITLE@", &c.card_subtitle)
            .replace("@CARD_TEXT@", &c.card_text)
            .replace("@HOVER_GLOW@", &c.hover_glow)
            .replace("@OVERLAY_BG@", &c.overlay_bg)
    }
}

impl Default for Theme {
    /// Returns the default theme (`dark`).
    fn default() -> Self {
        Self::builtin(ThemeName::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses_and_matches_its_name() {
        for name in ThemeName::ALL {
            let theme = Theme::builtin(name);
            assert_eq!(theme.name, name.as_str());
        }
        assert_eq!(Theme::BUILT_IN.len(), ThemeName::ALL.len());
    }

    #[test]
    fn from_name_rejects_unknown_themes() {
        assert!(Theme::from_name("ocean").is_some());
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn stylesheet_is_scoped_and_fully_substituted() {
        let css = Theme::builtin(ThemeName::Sunset).stylesheet("g1");
        assert!(css.contains("#g1 .cg-card"));
        assert!(css.contains("#ee9ca7"));
        assert!(!css.contains("@SCOPE@"));
        assert!(!css.contains("@CARD_BG@"));
        assert!(css.contains("@media (max-width: 768px)"));
    }

    #[test]
    fn two_scopes_do_not_overlap() {
        let theme = Theme::default();
        let a = theme.stylesheet("first");
        let b = theme.stylesheet("second");
        assert!(!a.contains("#second"));
        assert!(!b.contains("#first"));
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            ThemeName::Forest.source().replace("name = \"forest\"", "name = \"moss\"")
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "moss");
        assert_eq!(theme.colors.card_title, "#134e5e");
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"half\"").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(GalleryError::Theme(_))));
    }
}
