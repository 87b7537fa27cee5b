//! The annotation document: image reference, hex size, and group store.

use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::format::{DocumentError, DocumentFile};
use crate::geometry::{GeometryError, HexGeometry};
use crate::model::GroupStore;

/// Complete persisted state of one annotated image.
///
/// Created empty when a new image is loaded and a hex size is chosen,
/// mutated only through [`GroupStore`] operations, serialized on explicit
/// save and deserialized wholesale on load. Exclusively owns its store; the
/// referenced image stays external.
#[derive(Debug, Clone)]
pub struct AnnotationDocument {
    image_path: PathBuf,
    hex_size: u32,
    store: GroupStore,
}

impl AnnotationDocument {
    /// Create an empty document for an image with the given hex size.
    ///
    /// Fails with [`GeometryError::InvalidConfiguration`] when `hex_size`
    /// is zero; no editor session can proceed without a usable grid.
    pub fn new(image_path: impl Into<PathBuf>, hex_size: u32) -> Result<Self, GeometryError> {
        if hex_size == 0 {
            return Err(GeometryError::InvalidConfiguration(
                "hex size must be positive".to_string(),
            ));
        }
        Ok(Self {
            image_path: image_path.into(),
            hex_size,
            store: GroupStore::new(),
        })
    }

    /// Path of the annotated raster image.
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Hexagon pixel radius used by the grid.
    pub fn hex_size(&self) -> u32 {
        self.hex_size
    }

    /// Read access to the group store.
    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    /// Mutable access to the group store; every edit goes through its
    /// operations so the ownership invariant holds.
    pub fn store_mut(&mut self) -> &mut GroupStore {
        &mut self.store
    }

    /// Grid layout for this document over an image of the given extent.
    ///
    /// The extent comes from the image provider; the document itself never
    /// decodes pixels.
    pub fn geometry(&self, image_width: u32, image_height: u32) -> Result<HexGeometry, GeometryError> {
        HexGeometry::new(f64::from(self.hex_size), image_width, image_height)
    }

    /// Serialize the full document state to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let mut file = DocumentFile {
            image_path: self.image_path.to_string_lossy().into_owned(),
            hex_size: self.hex_size,
            groups: Default::default(),
            group_colors: Default::default(),
        };
        for group in self.store.groups() {
            let cells = group
                .sorted_cells()
                .into_iter()
                .map(|c| (c.col, c.row))
                .collect();
            file.groups.insert(group.name().to_string(), cells);
            file.group_colors
                .insert(group.name().to_string(), group.color().to_string());
        }
        file.to_json_bytes()
    }

    /// Deserialize a document from JSON bytes.
    ///
    /// Fails with [`DocumentError::MalformedDocument`] on schema violations.
    /// A cell listed under more than one group (legal in documents written
    /// before ownership was enforced) is repaired silently: groups are
    /// visited in sorted-name order and the last assignment wins. Missing or
    /// unparseable colors fall back to the palette cycle.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let file = DocumentFile::from_json_bytes(bytes)?;

        let mut doc = AnnotationDocument::new(PathBuf::from(&file.image_path), file.hex_size)
            .map_err(|e| DocumentError::malformed(e.to_string()))?;

        for (index, (name, cells)) in file.groups.iter().enumerate() {
            let color = file
                .group_colors
                .get(name)
                .and_then(|s| s.parse::<Color>().ok())
                .unwrap_or_else(|| Color::from_palette(index));
            // create_group activates the new group, so the assigns below
            // target it; a duplicate cell moves between groups, repairing
            // legacy multi-owner documents.
            doc.store
                .create_group(name.clone(), Some(color))
                .map_err(|e| DocumentError::malformed(e.to_string()))?;
            for &(col, row) in cells {
                doc.store
                    .assign(crate::geometry::Cell::new(col, row))
                    .map_err(|e| DocumentError::malformed(e.to_string()))?;
            }
        }
        doc.store.clear_active_group();

        log::info!(
            "Loaded document for {:?}: hex size {}, {} groups",
            doc.image_path,
            doc.hex_size,
            doc.store.len()
        );
        Ok(doc)
    }

    /// Save the document to a file.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        log::info!("Saving document to {:?}", path);
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        log::info!("Saved {} groups", self.store.len());
        Ok(())
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        log::info!("Loading document from {:?}", path);
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}
