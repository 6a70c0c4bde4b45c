//! Duplicate-triangle filter.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

use super::TriangleFilter;
use crate::config::LoaderConfig;

type TriangleKey = [[u64; 3]; 3];

/// Rejects a triangle whose three corners were already admitted by this
/// filter, regardless of corner order or winding.
///
/// Corners are compared after snapping to a grid of `tolerance`
/// millimetres. Triangles with a non-finite corner, or a corner too far out
/// to snap, are rejected and never recorded.
///
/// The set of seen triangles sits behind a `Mutex`, so one instance can be
/// shared across threads; with concurrent callers "first" means first to
/// take the lock.
#[derive(Debug)]
pub struct DuplicateTriangleFilter {
    tolerance: f64,
    seen: Mutex<HashSet<TriangleKey>>,
}

impl DuplicateTriangleFilter {
    /// Uses the kernel tolerance as grid size.
    pub fn new() -> Self {
        Self::with_tolerance(EPSILON_TOLERANCE)
    }

    /// Uses a custom grid size in millimetres. Non-positive or non-finite
    /// values fall back to the kernel tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        let tolerance = if tolerance > 0.0 && tolerance.is_finite() {
            tolerance
        } else {
            EPSILON_TOLERANCE
        };
        Self {
            tolerance,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Uses the loader's tolerance as grid size.
    ///
    /// # Examples
    /// ```
    /// use dmt_mesh::{DuplicateTriangleFilter, LoaderConfig};
    ///
    /// let config = LoaderConfig::new(1.0e-3, 1000, vec![2]).unwrap();
    /// assert_eq!(DuplicateTriangleFilter::from_config(&config).tolerance(), 1.0e-3);
    /// ```
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::with_tolerance(config.tolerance)
    }

    /// Grid size in millimetres.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of distinct triangles admitted so far.
    pub fn seen_count(&self) -> usize {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Forgets every admitted triangle.
    pub fn reset(&self) {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Grid cell of `v` as raw bits, `None` if it has no finite cell.
    fn snap(&self, v: DVec3) -> Option<[u64; 3]> {
        let cell = (v / self.tolerance).round();
        // + 0.0 folds -0.0 into 0.0 so both hash alike
        cell.is_finite()
            .then(|| (cell + DVec3::ZERO).to_array().map(f64::to_bits))
    }

    fn key(&self, a: DVec3, b: DVec3, c: DVec3) -> Option<TriangleKey> {
        let mut key = [self.snap(a)?, self.snap(b)?, self.snap(c)?];
        key.sort_unstable();
        Some(key)
    }
}

impl Default for DuplicateTriangleFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleFilter for DuplicateTriangleFilter {
    fn can_add_triangle(&self, vertex1: DVec3, vertex2: DVec3, vertex3: DVec3) -> bool {
        let Some(key) = self.key(vertex1, vertex2, vertex3) else {
            return false;
        };
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key)
    }
}
