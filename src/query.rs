//! Read-only projection of a document for viewer use.

use std::collections::HashSet;

use crate::color::Color;
use crate::document::AnnotationDocument;
use crate::geometry::Cell;
use crate::hit_test::HitTester;
use crate::model::StoreError;

/// Read-only lookups over a loaded document, built once per document and
/// immutable for its lifetime. A viewer uses it to drive highlighting; there
/// is no mutation path back into the document.
#[derive(Debug, Clone, Copy)]
pub struct QueryView<'a> {
    document: &'a AnnotationDocument,
}

impl<'a> QueryView<'a> {
    /// Create a view over a loaded document.
    pub fn new(document: &'a AnnotationDocument) -> Self {
        Self { document }
    }

    /// Name of the group owning `cell`, if any.
    pub fn group_of(&self, cell: Cell) -> Option<&'a str> {
        self.document.store().owner_of(cell)
    }

    /// The cells owned by the named group.
    pub fn cells_of(&self, name: &str) -> Result<&'a HashSet<Cell>, StoreError> {
        self.document.store().cells_of(name)
    }

    /// All group names, in creation order.
    pub fn group_names(&self) -> Vec<&'a str> {
        self.document.store().group_names().collect()
    }

    /// Highlight color of the named group.
    pub fn color_of(&self, name: &str) -> Option<&'a Color> {
        self.document.store().group(name).map(|g| g.color())
    }

    /// Name of the group covering a pixel coordinate: resolves the pixel to
    /// its cell and looks up the owner. `None` when the pixel is outside the
    /// grid or the cell is unassigned.
    pub fn group_at(&self, tester: &HitTester, px: f64, py: f64) -> Option<&'a str> {
        self.group_of(tester.locate(px, py)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HexGeometry;

    fn build_document() -> AnnotationDocument {
        let mut doc = AnnotationDocument::new("map.png", 20).unwrap();
        let store = doc.store_mut();
        store
            .create_group("Forest", Some(Color::Named("green".to_string())))
            .unwrap();
        store.assign(Cell::new(1, 0)).unwrap();
        store
            .create_group("Water", Some(Color::Named("blue".to_string())))
            .unwrap();
        store.assign(Cell::new(0, 0)).unwrap();
        doc
    }

    #[test]
    fn test_lookups() {
        let doc = build_document();
        let view = QueryView::new(&doc);

        assert_eq!(view.group_of(Cell::new(0, 0)), Some("Water"));
        assert_eq!(view.group_of(Cell::new(1, 0)), Some("Forest"));
        assert_eq!(view.group_of(Cell::new(9, 9)), None);

        assert_eq!(view.group_names(), vec!["Forest", "Water"]);
        assert_eq!(view.color_of("Water"), Some(&Color::Named("blue".to_string())));
        assert_eq!(view.color_of("Nope"), None);

        assert!(view.cells_of("Forest").unwrap().contains(&Cell::new(1, 0)));
        assert_eq!(
            view.cells_of("Nope").unwrap_err(),
            StoreError::UnknownGroup("Nope".to_string())
        );
    }

    #[test]
    fn test_group_at_pixel() {
        let doc = build_document();
        let view = QueryView::new(&doc);
        let geometry = HexGeometry::new(20.0, 200, 200).unwrap();
        let tester = HitTester::new(geometry);

        let (cx, cy) = geometry.cell_center(Cell::new(0, 0));
        assert_eq!(view.group_at(&tester, cx, cy), Some("Water"));

        // Inside the grid but unassigned.
        let (cx, cy) = geometry.cell_center(Cell::new(3, 3));
        assert_eq!(view.group_at(&tester, cx, cy), None);

        // Outside the grid entirely.
        assert_eq!(view.group_at(&tester, -500.0, -500.0), None);
    }
}
