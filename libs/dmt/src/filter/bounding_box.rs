//! Spatial-region filter.

use dmt_geometry::Length;
use glam::DVec3;

use super::TriangleFilter;

/// How many corners must lie inside the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Containment {
    /// Every corner inside (the triangle is fully contained).
    #[default]
    All,
    /// At least one corner inside (the triangle touches the box).
    Any,
}

/// Admits triangles that lie inside an axis-aligned box. Boundaries are
/// inclusive.
///
/// # Examples
/// ```
/// use dmt_geometry::Length;
/// use dmt_mesh::{BoundingBoxFilter, TriangleFilter};
/// use glam::DVec3;
///
/// let filter = BoundingBoxFilter::new(DVec3::ZERO, DVec3::ONE).with_margin(Length::new(0.5));
/// assert!(filter.can_add_triangle(DVec3::ZERO, DVec3::X, DVec3::splat(1.5)));
/// assert!(!filter.can_add_triangle(DVec3::ZERO, DVec3::X, DVec3::splat(2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBoxFilter {
    min: DVec3,
    max: DVec3,
    containment: Containment,
}

impl BoundingBoxFilter {
    /// Creates a filter for the box spanned by two opposite corners, in any
    /// order.
    pub fn new(corner_a: DVec3, corner_b: DVec3) -> Self {
        Self {
            min: corner_a.min(corner_b),
            max: corner_a.max(corner_b),
            containment: Containment::All,
        }
    }

    /// Grows the box by `margin` on every side. A negative margin shrinks
    /// it; a box shrunk past zero size admits nothing.
    pub fn with_margin(mut self, margin: Length) -> Self {
        let m = DVec3::splat(margin.value());
        self.min -= m;
        self.max += m;
        self
    }

    /// Sets how many corners must be inside.
    pub fn with_containment(mut self, containment: Containment) -> Self {
        self.containment = containment;
        self
    }

    /// Minimum corner.
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Returns true if `point` lies inside the box.
    #[inline]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl TriangleFilter for BoundingBoxFilter {
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool {
        let corners = [vertex1, vertex2, vertex3];
        match self.containment {
            Containment::All => corners.iter().all(|&v| self.contains(v)),
            Containment::Any => corners.iter().any(|&v| self.contains(v)),
        }
    }
}
