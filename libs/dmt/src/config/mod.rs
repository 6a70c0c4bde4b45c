//! Loader configuration building on the shared `config` crate.
//!
//! Wraps the workspace-wide [`GlobalConfig`] and adds the set of DMT file
//! versions a loader accepts.

use config::constants::{ConfigError, GlobalConfig, SUPPORTED_DMT_VERSIONS};
use thiserror::Error;

/// Settings applied by [`crate::DmtLoader`] while validating records.
///
/// # Examples
/// ```
/// use dmt_mesh::LoaderConfig;
/// let cfg = LoaderConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// assert!(cfg.supports_version(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Grid size in millimetres for filters built with `from_config`.
    pub tolerance: f64,
    /// Upper bound on triangles per block.
    pub max_triangles_per_block: usize,
    /// File versions accepted by the loader.
    pub supported_versions: Vec<u32>,
}

impl LoaderConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use dmt_mesh::LoaderConfig;
    /// let cfg = LoaderConfig::new(1.0e-8, 1000, vec![2]).unwrap();
    /// assert!(!cfg.supports_version(1));
    /// ```
    pub fn new(
        tolerance: f64,
        max_triangles_per_block: usize,
        supported_versions: Vec<u32>,
    ) -> Result<Self, LoaderConfigError> {
        let global = GlobalConfig::new(tolerance, max_triangles_per_block)?;
        if supported_versions.is_empty() {
            return Err(LoaderConfigError::NoSupportedVersions);
        }
        Ok(Self {
            tolerance: global.tolerance,
            max_triangles_per_block: global.max_triangles_per_block,
            supported_versions,
        })
    }

    /// Returns true if files of `version` can be loaded.
    #[inline]
    pub fn supports_version(&self, version: u32) -> bool {
        self.supported_versions.contains(&version)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        let global = GlobalConfig::default();
        Self {
            tolerance: global.tolerance,
            max_triangles_per_block: global.max_triangles_per_block,
            supported_versions: SUPPORTED_DMT_VERSIONS.to_vec(),
        }
    }
}

/// Error returned for invalid loader configuration.
#[derive(Debug, PartialEq, Error)]
pub enum LoaderConfigError {
    /// A workspace-level value was rejected.
    #[error(transparent)]
    Global(#[from] ConfigError),
    /// The supported version list is empty.
    #[error("at least one supported DMT version is required")]
    NoSupportedVersions,
}
