//! Group membership store.
//!
//! Owns every group of a document and enforces the ownership invariant: a
//! cell belongs to at most one group at any time. Assigning a cell that
//! another group owns moves it (last assignment wins), so highlight state is
//! never ambiguous.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::color::Color;
use crate::geometry::Cell;
use crate::model::Group;

/// Errors from group store operations.
///
/// All of these are recoverable at the UI boundary; a failed operation
/// leaves the store unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A group with this name already exists.
    #[error("group '{0}' already exists")]
    DuplicateGroupName(String),

    /// Group names must be non-empty.
    #[error("group name must not be empty")]
    InvalidName,

    /// No group with this name exists.
    #[error("unknown group '{0}'")]
    UnknownGroup(String),

    /// An assign was requested before any group was selected.
    #[error("no active group selected")]
    NoActiveGroup,
}

/// Mapping from group name to color and owned cells.
///
/// Exclusively owned by one [`AnnotationDocument`](crate::AnnotationDocument);
/// the UI layer routes every mutation through these operations.
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    groups: HashMap<String, Group>,
    /// Group names in creation order; drives palette cycling and listing.
    order: Vec<String>,
    /// Reverse index from cell to its owning group.
    owners: HashMap<Cell, String>,
    active: Option<String>,
}

impl GroupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group and make it the active one.
    ///
    /// When `color` is `None` the fixed palette is cycled by creation order,
    /// wrapping modulo the palette length.
    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        color: Option<Color>,
    ) -> Result<&Group, StoreError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        if self.groups.contains_key(&name) {
            return Err(StoreError::DuplicateGroupName(name));
        }

        let color = color.unwrap_or_else(|| Color::from_palette(self.order.len()));
        log::debug!("Created group '{}' with color {}", name, color);

        self.groups
            .insert(name.clone(), Group::new(name.clone(), color));
        self.order.push(name.clone());
        self.active = Some(name.clone());
        Ok(&self.groups[&name])
    }

    /// Select the group that subsequent [`assign`](Self::assign) calls target.
    pub fn set_active_group(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.groups.contains_key(name) {
            return Err(StoreError::UnknownGroup(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    /// Name of the currently active group, if any.
    pub fn active_group(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Assign a cell to the active group.
    ///
    /// The cell is first removed from whatever group currently owns it, so
    /// the at-most-one-owner invariant holds afterwards. Assigning a cell
    /// the active group already owns is a no-op.
    pub fn assign(&mut self, cell: Cell) -> Result<(), StoreError> {
        let Some(active) = self.active.clone() else {
            return Err(StoreError::NoActiveGroup);
        };
        // The active name always refers to an existing group, but check
        // before touching any state so a failure mutates nothing.
        if !self.groups.contains_key(&active) {
            return Err(StoreError::UnknownGroup(active));
        }

        if let Some(owner) = self.owners.get(&cell) {
            if *owner == active {
                return Ok(());
            }
            let previous = owner.clone();
            if let Some(group) = self.groups.get_mut(&previous) {
                group.cells.remove(&cell);
            }
            log::debug!("Cell {} moved from '{}' to '{}'", cell, previous, active);
        }

        if let Some(group) = self.groups.get_mut(&active) {
            group.cells.insert(cell);
        }
        self.owners.insert(cell, active);
        Ok(())
    }

    /// Remove a cell from whichever group owns it.
    ///
    /// Returns the name of the previous owner; `None` means the cell was
    /// unowned and nothing changed.
    pub fn unassign(&mut self, cell: Cell) -> Option<String> {
        let owner = self.owners.remove(&cell)?;
        if let Some(group) = self.groups.get_mut(&owner) {
            group.cells.remove(&cell);
        }
        log::debug!("Cell {} removed from '{}'", cell, owner);
        Some(owner)
    }

    /// Name of the group owning `cell`, if any.
    pub fn owner_of(&self, cell: Cell) -> Option<&str> {
        self.owners.get(&cell).map(String::as_str)
    }

    /// The cells owned by the named group.
    pub fn cells_of(&self, name: &str) -> Result<&HashSet<Cell>, StoreError> {
        self.groups
            .get(name)
            .map(Group::cells)
            .ok_or_else(|| StoreError::UnknownGroup(name.to_string()))
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Group names in creation order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.order.iter().filter_map(|name| self.groups.get(name))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store has no groups.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clear the active group selection (a freshly loaded document starts
    /// with none).
    pub(crate) fn clear_active_group(&mut self) {
        self.active = None;
    }
}
