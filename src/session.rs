//! Event-driven editing session.
//!
//! The UI layer never touches groups or cells directly; it delivers typed
//! input events (pointer clicks with an intent, group commands) and the
//! session routes them through the hit tester and the group store, one event
//! at a time. All mutations are synchronous and all-or-nothing.

use thiserror::Error;

use crate::color::Color;
use crate::document::AnnotationDocument;
use crate::geometry::{Cell, GeometryError};
use crate::hit_test::HitTester;
use crate::image_info::{self, ImageLoadError};
use crate::model::StoreError;

/// What a pointer event should do to the cell under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Add the cell to the active group (left click in the editor).
    Assign,
    /// Remove the cell from its owning group (right click).
    Unassign,
}

/// One input event delivered by the external UI.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer click or drag at a pixel coordinate.
    Pointer {
        /// Pixel x coordinate.
        x: f64,
        /// Pixel y coordinate.
        y: f64,
        /// Assign or unassign the covering cell.
        intent: Intent,
    },
    /// Create a new group and make it active. `color: None` draws the next
    /// palette color.
    CreateGroup {
        /// Name of the group to create.
        name: String,
        /// Explicit color, or `None` for the palette cycle.
        color: Option<Color>,
    },
    /// Make an existing group the target of subsequent assigns.
    SelectGroup {
        /// Name of the group to select.
        name: String,
    },
}

/// Errors from opening an editing session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The grid configuration is unusable.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The referenced image could not be read.
    #[error(transparent)]
    Image(#[from] ImageLoadError),
}

/// An editor session over one document.
///
/// Holds the document and the hit tester built from its grid configuration
/// and the image extent. Single-threaded: one event is handled at a time.
#[derive(Debug, Clone)]
pub struct EditSession {
    document: AnnotationDocument,
    tester: HitTester,
}

impl EditSession {
    /// Start a session for a document over an image of the given extent.
    pub fn new(
        document: AnnotationDocument,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, GeometryError> {
        let geometry = document.geometry(image_width, image_height)?;
        Ok(Self {
            document,
            tester: HitTester::new(geometry),
        })
    }

    /// Start a session on a new empty document, probing the image file for
    /// its extent.
    pub fn open(
        image_path: impl Into<std::path::PathBuf>,
        hex_size: u32,
    ) -> Result<Self, SessionError> {
        let image_path = image_path.into();
        let (width, height) = image_info::probe_dimensions(&image_path)?;
        let document = AnnotationDocument::new(image_path, hex_size)?;
        Ok(Self::new(document, width, height)?)
    }

    /// The document being edited.
    pub fn document(&self) -> &AnnotationDocument {
        &self.document
    }

    /// The hit tester for this session's grid.
    pub fn tester(&self) -> &HitTester {
        &self.tester
    }

    /// Finish the session, yielding the document for saving.
    pub fn into_document(self) -> AnnotationDocument {
        self.document
    }

    /// Apply one input event.
    ///
    /// Returns the cell a pointer event resolved to; `Ok(None)` for group
    /// commands and for pointer events outside the grid (a click on the
    /// image margin is a no-op, as is unassigning an unowned cell). A failed
    /// event leaves the document unchanged.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<Cell>, StoreError> {
        match event {
            InputEvent::Pointer { x, y, intent } => {
                let Some(cell) = self.tester.locate(x, y) else {
                    log::debug!("Pointer ({x}, {y}) outside the grid");
                    return Ok(None);
                };
                match intent {
                    Intent::Assign => self.document.store_mut().assign(cell)?,
                    Intent::Unassign => {
                        self.document.store_mut().unassign(cell);
                    }
                }
                Ok(Some(cell))
            }
            InputEvent::CreateGroup { name, color } => {
                self.document.store_mut().create_group(name, color)?;
                Ok(None)
            }
            InputEvent::SelectGroup { name } => {
                self.document.store_mut().set_active_group(&name)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        let doc = AnnotationDocument::new("map.png", 20).unwrap();
        EditSession::new(doc, 200, 200).unwrap()
    }

    fn pointer(x: f64, y: f64, intent: Intent) -> InputEvent {
        InputEvent::Pointer { x, y, intent }
    }

    #[test]
    fn test_click_with_no_group_fails_cleanly() {
        let mut s = session();
        let err = s.handle(pointer(10.0, 10.0, Intent::Assign)).unwrap_err();
        assert_eq!(err, StoreError::NoActiveGroup);
        assert!(s.document().store().is_empty());
    }

    #[test]
    fn test_create_assign_select_flow() {
        let mut s = session();
        s.handle(InputEvent::CreateGroup {
            name: "Forest".to_string(),
            color: None,
        })
        .unwrap();

        let geometry = *s.tester().geometry();
        let (cx, cy) = geometry.cell_center(Cell::new(1, 1));
        let hit = s.handle(pointer(cx, cy, Intent::Assign)).unwrap();
        assert_eq!(hit, Some(Cell::new(1, 1)));
        assert_eq!(s.document().store().owner_of(Cell::new(1, 1)), Some("Forest"));

        s.handle(InputEvent::CreateGroup {
            name: "Water".to_string(),
            color: None,
        })
        .unwrap();
        s.handle(InputEvent::SelectGroup {
            name: "Forest".to_string(),
        })
        .unwrap();
        assert_eq!(s.document().store().active_group(), Some("Forest"));
    }

    #[test]
    fn test_right_click_unassigns() {
        let mut s = session();
        s.handle(InputEvent::CreateGroup {
            name: "Forest".to_string(),
            color: None,
        })
        .unwrap();

        let geometry = *s.tester().geometry();
        let (cx, cy) = geometry.cell_center(Cell::new(2, 0));
        s.handle(pointer(cx, cy, Intent::Assign)).unwrap();
        s.handle(pointer(cx, cy, Intent::Unassign)).unwrap();
        assert_eq!(s.document().store().owner_of(Cell::new(2, 0)), None);

        // Unassigning again is a no-op, not an error.
        s.handle(pointer(cx, cy, Intent::Unassign)).unwrap();
    }

    #[test]
    fn test_click_outside_grid_is_noop() {
        let mut s = session();
        s.handle(InputEvent::CreateGroup {
            name: "Forest".to_string(),
            color: None,
        })
        .unwrap();
        let hit = s.handle(pointer(-400.0, -400.0, Intent::Assign)).unwrap();
        assert_eq!(hit, None);
        assert!(s.document().store().cells_of("Forest").unwrap().is_empty());
    }

    #[test]
    fn test_open_probes_image_extent() {
        let dir = std::env::temp_dir().join("hgat_session_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("map.png");
        image::RgbImage::from_pixel(100, 100, image::Rgb([0, 0, 0]))
            .save(&path)
            .unwrap();

        let s = EditSession::open(&path, 20).unwrap();
        let (max_row, max_col) = s.tester().geometry().grid_extent().unwrap();
        assert_eq!((max_row, max_col), (4, 3));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_missing_image_fails() {
        assert!(matches!(
            EditSession::open("/no/such/image.png", 20),
            Err(SessionError::Image(_))
        ));
    }
}
