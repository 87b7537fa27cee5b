//! Serde representation of the persisted JSON schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format::error::DocumentError;

/// On-disk form of a document.
///
/// Cells are `[col, row]` integer pairs. Maps are ordered so saved files are
/// byte-stable across runs; cell arrays are written in `(row, col)` order for
/// the same reason, though load treats them as sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    /// Path to the raster image, resolved relative to the loader's working
    /// context. The image itself is never embedded.
    pub image_path: String,

    /// Pixel radius of one hexagon. Must be positive.
    pub hex_size: u32,

    /// Group name to owned cell coordinates.
    pub groups: BTreeMap<String, Vec<(i32, i32)>>,

    /// Group name to color string: a palette name or `#rrggbb`.
    ///
    /// Optional on load; groups without an entry get a palette color.
    #[serde(default)]
    pub group_colors: BTreeMap<String, String>,
}

impl DocumentFile {
    /// Serialize to pretty-printed JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json.into_bytes())
    }

    /// Parse and validate JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let file: DocumentFile = serde_json::from_slice(bytes)?;
        if file.hex_size == 0 {
            return Err(DocumentError::malformed("hex_size must be positive"));
        }
        Ok(file)
    }
}
