//! Persisted document format.
//!
//! Documents are stored as a single JSON object holding the image reference,
//! the hex size, and the group-to-cells and group-to-color mappings. The
//! format is shared between the editor and the read-only viewer; both
//! regenerate the grid deterministically from `hex_size` and the image
//! extent, so no grid state is persisted.

mod error;
mod schema;

#[cfg(test)]
mod tests;

pub use error::DocumentError;
pub use schema::DocumentFile;
