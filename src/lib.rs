//! Cardgallery: a searchable card grid with a detail overlay, rendered to HTML.
//!
//! A gallery takes an in-memory list of records, projects each one through a
//! column mapping into a card (image, title, subtitle, description) and renders
//! the cards as a grid under a search box. Typing filters the cards by
//! case-insensitive substring; activating a card opens an overlay with the full
//! record. Missing or broken images fall back to a generated avatar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Widget (widget/)                                   │  ← Mounted instance
//! │  - Owns state, theme and element ids                │
//! │  - Applies actions to its host                      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ App Layer     │   │ UI Layer      │   │ Host Layer    │
//! │ (app/)        │   │ (ui/)         │   │ (host/)       │
//! │ - Events      │   │ - Rendering   │   │ - Mount points│
//! │ - Filter      │   │ - Theming     │   │ - Scroll lock │
//! │ - Overlay     │   │ - Placeholders│   │ - HTML page   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): records, column mapping, errors  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Gallery state machine with event/action model
//! - [`domain`]: Core domain types (Record, Columns, errors)
//! - [`host`]: Host abstraction and the in-memory HTML page
//! - [`ui`]: Markup rendering with theme support
//! - [`widget`]: The mounted gallery handle
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! [`Config`] can be built in code or loaded from TOML on top of a [`Preset`]:
//!
//! ```toml
//! title = "Spellbook"
//! theme = "ocean"
//! show_stats = true
//!
//! [columns]
//! image = "icon"
//! title = "name"
//! subtitle = "school"
//! description = "effect"
//!
//! [[data]]
//! name = "Fireball"
//! school = "Evocation"
//! ```
//!
//! # Example
//!
//! ```rust
//! use cardgallery::host::Page;
//! use cardgallery::{init, Config, Record};
//!
//! let mut page = Page::new("Glossary").with_mount("glossary");
//! let config = Config {
//!     data: Some(vec![Record::from_pairs([("title", "Sword")])]),
//!     ..Config::default()
//! };
//! let gallery = init(&mut page, "glossary", config)?;
//! assert_eq!(gallery.count(), 1);
//! # Ok::<(), cardgallery::GalleryError>(())
//! ```

pub mod app;
pub mod domain;
pub mod host;
pub mod observability;
pub mod ui;
pub mod widget;

pub use app::{handle_event, Action, Event, GalleryState};
pub use domain::{CardFields, Columns, GalleryError, Record, Result};
pub use ui::{CardLayout, Theme, ThemeName};
pub use widget::Gallery;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use app::Labels;
use host::Host;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Named default configurations reproducing the two stock galleries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Generic glossary: round avatars, stats line, `dark` theme.
    #[default]
    Glossary,
    /// Character database: poster cards keyed by English and Chinese names.
    Characters,
}

impl Preset {
    /// The preset's configuration, without data.
    #[must_use]
    pub fn config(self) -> Config {
        match self {
            Self::Glossary => Config {
                title: "Glossary".to_string(),
                subtitle: None,
                search_placeholder: "Search...".to_string(),
                no_results_text: "No results found!".to_string(),
                show_stats: true,
                theme: ThemeName::Dark,
                theme_file: None,
                columns: Columns::default(),
                layout: CardLayout::Avatar,
                data: None,
            },
            Self::Characters => Config {
                title: "Default Title".to_string(),
                subtitle: Some("Default subtitle.".to_string()),
                search_placeholder: "\u{1f50d} Search by English or Chinese name...".to_string(),
                no_results_text: "No characters found.".to_string(),
                show_stats: false,
                theme: ThemeName::Midnight,
                theme_file: None,
                columns: Columns {
                    image: "picUrl".to_string(),
                    title: "englishName".to_string(),
                    subtitle: "chineseName".to_string(),
                    description: "intro".to_string(),
                },
                layout: CardLayout::Poster,
                data: None,
            },
        }
    }
}

/// Gallery configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Heading text.
    pub title: String,

    /// Optional line under the heading.
    pub subtitle: Option<String>,

    /// Search input hint.
    pub search_placeholder: String,

    /// Text of the empty indicator.
    pub no_results_text: String,

    /// Whether to render the visible/total count line.
    pub show_stats: bool,

    /// Built-in theme. Ignored if `theme_file` is set.
    pub theme: ThemeName,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<PathBuf>,

    /// Which record fields feed the image, title, subtitle and description.
    pub columns: Columns,

    /// Card arrangement.
    pub layout: CardLayout,

    /// The records. `None` means the collection is missing, which the widget
    /// reports on screen; `Some(vec![])` is a valid empty gallery.
    pub data: Option<Vec<Record>>,
}

impl Default for Config {
    fn default() -> Self {
        Preset::Glossary.config()
    }
}

/// On-disk configuration: every key optional, applied over a preset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    preset: Option<Preset>,
    title: Option<String>,
    subtitle: Option<String>,
    search_placeholder: Option<String>,
    no_results_text: Option<String>,
    show_stats: Option<bool>,
    theme: Option<ThemeName>,
    theme_file: Option<PathBuf>,
    columns: Option<Columns>,
    layout: Option<CardLayout>,
    data: Option<Vec<Record>>,
}

impl ConfigFile {
    fn apply(self, base: Preset) -> Config {
        let mut config = self.preset.unwrap_or(base).config();
        if let Some(title) = self.title {
            config.title = title;
        }
        if self.subtitle.is_some() {
            config.subtitle = self.subtitle;
        }
        if let Some(placeholder) = self.search_placeholder {
            config.search_placeholder = placeholder;
        }
        if let Some(text) = self.no_results_text {
            config.no_results_text = text;
        }
        if let Some(show) = self.show_stats {
            config.show_stats = show;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        config.data = self.data;
        config
    }
}

impl Config {
    /// Parses TOML configuration over `preset`'s defaults.
    ///
    /// A `preset` key in the document overrides the `preset` argument.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] on invalid TOML, unknown keys or values
    /// of the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cardgallery::{Config, Preset, ThemeName};
    ///
    /// let config = Config::from_toml_str("theme = \"forest\"\n[[data]]\ntitle = \"Oak\"", Preset::Glossary)?;
    /// assert_eq!(config.theme, ThemeName::Forest);
    /// assert_eq!(config.data.unwrap()[0].text("title"), "Oak");
    /// # Ok::<(), cardgallery::GalleryError>(())
    /// ```
    pub fn from_toml_str(source: &str, preset: Preset) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(source).map_err(|e| GalleryError::Config(e.to_string()))?;
        Ok(file.apply(preset))
    }

    /// Loads TOML configuration from a file over `preset`'s defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] if the file cannot be read and
    /// [`GalleryError::Config`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P, preset: Preset) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source, preset)
    }

    /// Loads records from a JSON file holding an array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Io`] or [`GalleryError::Json`].
    pub fn load_data<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
        let source = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }

    /// Resolves the theme: `theme_file` if set and loadable, else `theme`.
    ///
    /// A theme file that fails to load is logged and replaced by `theme`.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || Theme::builtin(self.theme),
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using built-in");
                    Theme::builtin(self.theme)
                })
            },
        )
    }

    /// UI copy and presentation switches for the widget state.
    #[must_use]
    pub fn labels(&self) -> Labels {
        Labels {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            search_placeholder: self.search_placeholder.clone(),
            no_results_text: self.no_results_text.clone(),
            show_stats: self.show_stats,
            layout: self.layout,
        }
    }
}

/// Mounts a gallery into `host` at `mount_id`.
///
/// Shorthand for [`Gallery::mount`].
///
/// # Errors
///
/// Returns [`GalleryError::MountNotFound`] if the mount point does not exist.
pub fn init<H: Host + ?Sized>(host: &mut H, mount_id: &str, config: Config) -> Result<Gallery> {
    Gallery::mount(host, mount_id, config)
}
