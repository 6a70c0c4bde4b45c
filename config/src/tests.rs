//! # Tests for Config Constants
//!
//! Cross-constant sanity checks.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

#[test]
fn test_degenerate_area_not_below_tolerance() {
    assert!(
        DEGENERATE_AREA_EPSILON >= EPSILON_TOLERANCE,
        "DEGENERATE_AREA_EPSILON should be >= EPSILON_TOLERANCE"
    );
}

// =============================================================================
// DMT VERSION TESTS
// =============================================================================

#[test]
fn test_current_version_is_supported() {
    assert!(SUPPORTED_DMT_VERSIONS.contains(&CURRENT_DMT_VERSION));
}

#[test]
fn test_supported_versions_are_unique() {
    for (i, a) in SUPPORTED_DMT_VERSIONS.iter().enumerate() {
        for b in &SUPPORTED_DMT_VERSIONS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_default_triangle_limit_matches_constant() {
    assert_eq!(
        GlobalConfig::default().max_triangles_per_block,
        MAX_TRIANGLES_PER_BLOCK
    );
}
