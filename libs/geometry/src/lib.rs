//! # DMT Geometry
//!
//! Value types used throughout DMT construction: a millimetre [`Length`]
//! and a dense [`Matrix`].
//!
//! Both types are self-contained and have no knowledge of meshes.
//!
//! ## Usage
//!
//! ```rust
//! use dmt_geometry::{Length, Matrix};
//!
//! let offset = Length::new(3.0) + 6.0;
//! assert_eq!(offset, Length::new(9.0));
//!
//! let m = Matrix::identity(3).unwrap().multiply(2.0);
//! assert_eq!(m.get(1, 1).unwrap(), 2.0);
//! ```

pub mod error;
pub mod length;
pub mod matrix;

pub use error::{GeometryError, GeometryResult};
pub use length::Length;
pub use matrix::Matrix;
