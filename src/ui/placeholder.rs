//! Deterministic placeholder avatars.
//!
//! Substitutes for a missing or broken card image: a square tile filled with a
//! two-stop gradient whose hue is derived from the seed text, with the seed's
//! first character centred on top. Output is an SVG document, usually consumed
//! as a `data:` URI so it never touches the network.
//!
//! # Example
//!
//! ```rust
//! use cardgallery::ui::placeholder::Placeholder;
//!
//! let a = Placeholder::generate("Alice", 130);
//! assert_eq!(a, Placeholder::generate("Alice", 130));
//! assert_eq!(a.initial, "A");
//! assert!(a.data_uri().starts_with("data:image/svg+xml;base64,"));
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::ui::helpers::escape_html;

/// Edge length of card placeholders, in pixels.
pub const CARD_TILE_SIZE: u32 = 130;

/// Offset between the two gradient stops on the colour wheel.
const HUE_SPREAD: u32 = 40;

/// A generated avatar tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Base hue in degrees, `0..360`.
    pub hue: u32,
    /// Uppercased first character of the seed.
    pub initial: String,
    /// Edge length in pixels.
    pub size: u32,
}

impl Placeholder {
    /// Generates the placeholder for `seed`.
    ///
    /// An empty seed renders as `?`.
    #[must_use]
    pub fn generate(seed: &str, size: u32) -> Self {
        let initial = seed
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect());

        Self {
            hue: hue_for(seed),
            initial,
            size,
        }
    }

    /// Renders the tile as an SVG document.
    #[must_use]
    pub fn svg(&self) -> String {
        let size = self.size;
        let half = size / 2;
        let font_size = size * 2 / 5;
        let end_hue = (self.hue + HUE_SPREAD) % 360;
        let initial = escape_html(&self.initial);

        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\
<defs>\
<linearGradient id=\"g\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">\
<stop offset=\"0\" stop-color=\"hsl({hue}, 70%, 65%)\"/>\
<stop offset=\"1\" stop-color=\"hsl({end_hue}, 70%, 55%)\"/>\
</linearGradient>\
<filter id=\"s\"><feDropShadow dx=\"0\" dy=\"0\" stdDeviation=\"2\" flood-color=\"#000\" flood-opacity=\"0.3\"/></filter>\
</defs>\
<rect width=\"{size}\" height=\"{size}\" fill=\"url(#g)\"/>\
<text x=\"{half}\" y=\"{half}\" fill=\"#fff\" font-family=\"-apple-system, BlinkMacSystemFont, sans-serif\" \
font-size=\"{font_size}\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\" filter=\"url(#s)\">{initial}</text>\
</svg>",
            hue = self.hue,
        )
    }

    /// Renders the tile as a base64 `data:` URI usable as an image `src`.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.svg()))
    }
}

/// Hue for a seed: the sum of its UTF-16 code units modulo 360.
#[must_use]
pub fn hue_for(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0, |hue, unit| (hue + u32::from(unit)) % 360)
}

/// Data URI of the card-sized placeholder for `seed`.
#[must_use]
pub fn card_placeholder(seed: &str) -> String {
    Placeholder::generate(seed, CARD_TILE_SIZE).data_uri()
}
