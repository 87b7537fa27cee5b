//! Data model: groups of grid cells and the store that owns them.

mod group;
mod store;

pub use group::Group;
pub use store::{GroupStore, StoreError};
