//! HGAT - Hex Grid Annotation Tool
//!
//! Overlays a deterministic hexagonal grid on a raster image and assigns
//! grid cells to named, colored groups. Documents are persisted as JSON and
//! can be re-loaded by a read-only viewer that queries cell ownership.
//!
//! The engine is headless: hit-testing and grid generation are computed
//! analytically from the grid configuration, never from rendered primitives,
//! so an editor and a viewer always agree on coordinates.

pub mod color;
pub mod document;
pub mod format;
pub mod geometry;
pub mod image_info;
pub mod model;
pub mod query;
pub mod session;

pub use color::Color;
pub use document::AnnotationDocument;
pub use format::DocumentError;
pub use geometry::{Cell, GeometryError, HexGeometry};
pub use hit_test::HitTester;
pub use image_info::ImageLoadError;
pub use model::{Group, GroupStore, StoreError};
pub use query::QueryView;
pub use session::{EditSession, InputEvent, Intent, SessionError};
