//! # Triangle Filters
//!
//! A [`TriangleFilter`] decides whether a candidate triangle is admitted
//! into the mesh being built. The loader asks exactly once per triangle,
//! in source order, before touching the mesh; a rejected triangle is
//! skipped.
//!
//! ## Provided filters
//!
//! | Filter | Admits |
//! |---|---|
//! | [`NoFilter`] | everything |
//! | [`BoundingBoxFilter`] | triangles inside an axis-aligned box |
//! | [`DegenerateTriangleFilter`] | triangles with non-zero area |
//! | [`DuplicateTriangleFilter`] | the first occurrence of each vertex set |
//! | [`AllFilters`] | triangles every inner filter admits |
//!
//! Any `Fn(DVec3, DVec3, DVec3) -> bool + Send + Sync` closure is also a
//! filter.
//!
//! Filters must be safe to call from several threads, since
//! [`crate::DmtLoader::load_parallel`] admits blocks concurrently. Stateful
//! filters guard their state internally.

mod bounding_box;
mod degenerate;
mod duplicate;

pub use bounding_box::{BoundingBoxFilter, Containment};
pub use degenerate::DegenerateTriangleFilter;
pub use duplicate::DuplicateTriangleFilter;

use glam::DVec3;

/// Admission policy for triangles during mesh construction.
pub trait TriangleFilter: Send + Sync {
    /// Returns true if the triangle `(vertex1, vertex2, vertex3)` should be
    /// added. Must not modify the mesh.
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool;
}

impl<F> TriangleFilter for F
where
    F: Fn(DVec3, DVec3, DVec3) -> bool + Send + Sync,
{
    #[inline]
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool {
        self(vertex1, vertex2, vertex3)
    }
}

/// Admits every triangle, including degenerate ones.
///
/// # Examples
/// ```
/// use dmt_mesh::{NoFilter, TriangleFilter};
/// use glam::DVec3;
///
/// assert!(NoFilter.can_add_triangle(DVec3::ZERO, DVec3::ZERO, DVec3::ZERO));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl TriangleFilter for NoFilter {
    #[inline]
    fn can_add_triangle(&self, _: DVec3, _: DVec3, _: DVec3) -> bool {
        true
    }
}

/// Conjunction of filters, consulted in insertion order.
///
/// Evaluation stops at the first rejection, so later filters never see
/// that triangle. Put stateful filters such as
/// [`DuplicateTriangleFilter`] last so they only record triangles that
/// every other filter admitted.
///
/// # Examples
/// ```
/// use dmt_mesh::{AllFilters, DegenerateTriangleFilter, DuplicateTriangleFilter, TriangleFilter};
/// use glam::DVec3;
///
/// let filter = AllFilters::new()
///     .with(DegenerateTriangleFilter::new())
///     .with(DuplicateTriangleFilter::new());
/// assert!(filter.can_add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y));
/// assert!(!filter.can_add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y));
/// ```
#[derive(Default)]
pub struct AllFilters {
    filters: Vec<Box<dyn TriangleFilter>>,
}

impl AllFilters {
    /// Creates an empty conjunction, which admits everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter.
    pub fn with(mut self, filter: impl TriangleFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of inner filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if there are no inner filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl std::fmt::Debug for AllFilters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllFilters")
            .field("len", &self.filters.len())
            .finish()
    }
}

impl TriangleFilter for AllFilters {
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool {
        self.filters
            .iter()
            .all(|f| f.can_add_triangle(vertex1, vertex2, vertex3))
    }
}
