//! Group data model.

use std::collections::HashSet;

use crate::color::Color;
use crate::geometry::Cell;

/// A named, colored set of grid cells.
///
/// Membership is mutated only through [`GroupStore`](crate::model::GroupStore)
/// operations so the at-most-one-owner invariant always holds.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    color: Color,
    pub(crate) cells: HashSet<Cell>,
}

impl Group {
    pub(crate) fn new(name: String, color: Color) -> Self {
        Self {
            name,
            color,
            cells: HashSet::new(),
        }
    }

    /// Display name of the group, unique within a document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Highlight color of the group.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The cells this group owns.
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    /// Whether this group owns `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of cells in the group.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the group owns no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The group's cells in deterministic `(row, col)` order, for stable
    /// serialization and display.
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort();
        cells
    }
}
