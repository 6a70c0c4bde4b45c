//! Centralized configuration values shared across the DMT kernel crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by explicit approximate comparisons.
///
/// Equality on `Length` and `Matrix` is exact; this value is only applied
/// where a caller asks for a tolerance-based comparison.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Triangle area (square millimetres) at or below which a triangle is
/// treated as degenerate.
///
/// # Examples
/// ```
/// use config::constants::{DEGENERATE_AREA_EPSILON, EPSILON_TOLERANCE};
/// assert!(DEGENERATE_AREA_EPSILON >= EPSILON_TOLERANCE);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1.0e-8;

// =============================================================================
// DMT FILE CONSTANTS
// =============================================================================

/// DMT file format versions the loader recognizes.
///
/// # Examples
/// ```
/// use config::constants::SUPPORTED_DMT_VERSIONS;
/// assert!(!SUPPORTED_DMT_VERSIONS.is_empty());
/// ```
pub const SUPPORTED_DMT_VERSIONS: &[u32] = &[1, 2];

/// Version stamped on records produced from an in-memory model.
///
/// # Examples
/// ```
/// use config::constants::{CURRENT_DMT_VERSION, SUPPORTED_DMT_VERSIONS};
/// assert!(SUPPORTED_DMT_VERSIONS.contains(&CURRENT_DMT_VERSION));
/// ```
pub const CURRENT_DMT_VERSION: u32 = 2;

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of triangles accepted in a single triangle block.
///
/// Safety limit to prevent memory exhaustion from corrupt block headers.
///
/// # Examples
/// ```
/// use config::constants::MAX_TRIANGLES_PER_BLOCK;
/// assert!(MAX_TRIANGLES_PER_BLOCK >= 1_000_000);
/// ```
pub const MAX_TRIANGLES_PER_BLOCK: usize = 10_000_000;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometric predicates.
    pub tolerance: f64,
    /// Upper bound on triangles per block.
    pub max_triangles_per_block: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and triangle limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 500).expect("valid config");
    /// assert_eq!(cfg.max_triangles_per_block, 500);
    /// ```
    pub fn new(tolerance: f64, max_triangles_per_block: usize) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if max_triangles_per_block == 0 {
            return Err(ConfigError::InvalidTriangleLimit(max_triangles_per_block));
        }
        Ok(Self {
            tolerance,
            max_triangles_per_block,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            max_triangles_per_block: MAX_TRIANGLES_PER_BLOCK,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the triangle limit would reject every block.
    InvalidTriangleLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidTriangleLimit(value) => {
                write!(f, "max_triangles_per_block must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
