//! Degeneracy filter.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

use super::TriangleFilter;
use crate::mesh::triangle_area;

/// Rejects triangles whose area is at or below a threshold: coincident
/// corners, collinear corners, and slivers. Triangles with non-finite
/// coordinates are rejected too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateTriangleFilter {
    min_area: f64,
}

impl DegenerateTriangleFilter {
    /// Uses the kernel's default degenerate-area threshold.
    pub fn new() -> Self {
        Self {
            min_area: DEGENERATE_AREA_EPSILON,
        }
    }

    /// Uses a custom threshold in square millimetres.
    pub fn with_min_area(min_area: f64) -> Self {
        Self { min_area }
    }

    /// The threshold in square millimetres.
    pub fn min_area(&self) -> f64 {
        self.min_area
    }
}

impl Default for DegenerateTriangleFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleFilter for DegenerateTriangleFilter {
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool {
        // NaN compares false, so non-finite input is rejected here
        triangle_area(vertex1, vertex2, vertex3) > self.min_area
    }
}
