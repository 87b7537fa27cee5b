//! Group color values and the default palette.
//!
//! Colors are persisted as strings: either a named color (the editor cycles
//! a fixed 25-entry palette by group creation order) or a `#rrggbb` hex
//! string from a color picker.

use std::fmt;
use std::str::FromStr;

/// The fixed palette cycled by group creation order.
pub const PALETTE: [&str; 25] = [
    "red", "green", "blue", "yellow", "orange", "purple", "cyan", "magenta", "lime", "pink",
    "teal", "lavender", "brown", "beige", "maroon", "mint", "olive", "coral", "navy", "grey",
    "white", "black", "violet", "indigo", "gold",
];

/// A group color: a named color or an explicit RGB triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// A color referred to by name (usually one of [`PALETTE`]).
    Named(String),
    /// An explicit RGB color from a color picker.
    Rgb([u8; 3]),
}

impl Color {
    /// The palette entry for the `index`-th created group, wrapping modulo
    /// the palette length.
    pub fn from_palette(index: usize) -> Self {
        Color::Named(PALETTE[index % PALETTE.len()].to_string())
    }

    /// RGB value of this color, if known.
    ///
    /// Named colors outside the RGB table (tolerated on load) return `None`;
    /// a renderer falls back to its own default for those.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        match self {
            Color::Rgb(rgb) => Some(*rgb),
            Color::Named(name) => named_rgb(name),
        }
    }
}

/// Error from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color string: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError(s.to_string()));
            }
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorParseError(s.to_string()))?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorParseError(s.to_string()))?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorParseError(s.to_string()))?;
            return Ok(Color::Rgb([r, g, b]));
        }
        if s.is_empty() {
            return Err(ColorParseError(s.to_string()));
        }
        Ok(Color::Named(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb([r, g, b]) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// RGB lookup for the palette's named colors.
pub fn named_rgb(name: &str) -> Option<[u8; 3]> {
    let rgb = match name {
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "purple" => [128, 0, 128],
        "cyan" => [0, 255, 255],
        "magenta" => [255, 0, 255],
        "lime" => [0, 255, 0],
        "pink" => [255, 192, 203],
        "teal" => [0, 128, 128],
        "lavender" => [230, 230, 250],
        "brown" => [165, 42, 42],
        "beige" => [245, 245, 220],
        "maroon" => [128, 0, 0],
        "mint" => [189, 252, 201],
        "olive" => [128, 128, 0],
        "coral" => [255, 127, 80],
        "navy" => [0, 0, 128],
        "grey" => [128, 128, 128],
        "white" => [255, 255, 255],
        "black" => [0, 0, 0],
        "violet" => [238, 130, 238],
        "indigo" => [75, 0, 130],
        "gold" => [255, 215, 0],
        _ => return None,
    };
    Some(rgb)
}
