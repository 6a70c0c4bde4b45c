//! # Config Crate
//!
//! Centralized configuration constants for the DMT geometry kernel.
//! Tolerances, supported file versions and safety limits live here so the
//! geometry and mesh crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, SUPPORTED_DMT_VERSIONS, CURRENT_DMT_VERSION};
//!
//! // Use EPSILON_TOLERANCE for explicit floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! // The version written by default is always readable
//! assert!(SUPPORTED_DMT_VERSIONS.contains(&CURRENT_DMT_VERSION));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres Only**: Every length-valued constant is in millimetres
//! - **Validated Snapshots**: `GlobalConfig` rejects nonsensical values

pub mod constants;

#[cfg(test)]
mod tests;
