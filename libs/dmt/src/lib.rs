//! # DMT Mesh
//!
//! Construction of triangulated DMT models from parsed file records.
//!
//! ## Architecture
//!
//! ```text
//! file reader (external) → DmtFile → DmtLoader (+ TriangleFilter) → DmtModel
//! ```
//!
//! The loader validates the records, then offers each triangle to a single
//! [`TriangleFilter`] and adds the admitted ones to the model. Structural
//! problems surface as [`DmtFileError`] values; a failed load returns no
//! model at all.
//!
//! ## Usage
//!
//! ```rust
//! use dmt_mesh::{DmtBlock, DmtFile, DmtFileErrorKind, DmtLoader, NoFilter};
//! use glam::DVec3;
//!
//! let file = DmtFile::new(2).with_block(DmtBlock::new(
//!     2,
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     vec![[0, 1, 2]],
//! ));
//! let model = DmtLoader::new(&NoFilter).load(&file).unwrap();
//! assert_eq!(model.triangle_count(), 1);
//!
//! let empty = DmtFile::new(2);
//! let err = DmtLoader::new(&NoFilter).load(&empty).unwrap_err();
//! assert_eq!(err.kind(), DmtFileErrorKind::NoTriangleBlocks);
//! ```
//!
//! ## Logging
//!
//! Loads emit `tracing` events at `debug` (start and summary) and `trace`
//! (each rejected triangle). Errors are returned, not logged.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod mesh;
pub mod model;
pub mod paths;
pub mod records;

pub use config::{LoaderConfig, LoaderConfigError};
pub use error::{DmtFileError, DmtFileErrorKind, DmtResult, ErrorContext};
pub use filter::{
    AllFilters, BoundingBoxFilter, Containment, DegenerateTriangleFilter, DuplicateTriangleFilter,
    NoFilter, TriangleFilter,
};
pub use loader::{DmtLoader, LoadReport};
pub use mesh::Mesh;
pub use model::DmtModel;
pub use paths::{check_read_target, check_write_target};
pub use records::{DmtBlock, DmtFile};
