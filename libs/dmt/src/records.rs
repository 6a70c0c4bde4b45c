//! # DMT Records
//!
//! Parsed contents of a DMT file as handed over by the file reader. The
//! on-disk byte layout is owned by the reader; this module only checks the
//! structural rules a well-formed file must satisfy.

use std::path::PathBuf;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;
use crate::error::{DmtFileError, DmtFileErrorKind, DmtResult};
use crate::model::DmtModel;

/// One triangle block: its own vertex list and index triples into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmtBlock {
    /// Version tag written in the block header.
    pub version: u32,
    /// Vertex positions in millimetres.
    pub vertices: Vec<DVec3>,
    /// Triangles as indices into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

impl DmtBlock {
    /// Creates a block.
    pub fn new(version: u32, vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            version,
            vertices,
            triangles,
        }
    }
}

/// A parsed DMT file.
///
/// # Examples
/// ```
/// use dmt_mesh::{DmtBlock, DmtFile, LoaderConfig};
/// use glam::DVec3;
///
/// let file = DmtFile::new(2).with_block(DmtBlock::new(
///     2,
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// ));
/// assert!(file.validate(&LoaderConfig::default()).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DmtFile {
    /// Where the records were read from, used only for error context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// File-level version tag.
    pub version: u32,
    /// Triangle blocks in file order.
    #[serde(default)]
    pub blocks: Vec<DmtBlock>,
}

impl DmtFile {
    /// Creates a file with no blocks.
    pub fn new(version: u32) -> Self {
        Self {
            path: None,
            version,
            blocks: Vec::new(),
        }
    }

    /// Sets the source path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Appends a block.
    pub fn with_block(mut self, block: DmtBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Total triangles declared over all blocks.
    pub fn triangle_count(&self) -> usize {
        self.blocks.iter().map(|b| b.triangles.len()).sum()
    }

    /// Checks the structural rules, returning the first violation.
    ///
    /// Order of checks:
    /// 1. file version is supported
    /// 2. at least one block exists
    /// 3. for each block in order: version matches the file, it has
    ///    vertices, it has triangles, it is within the triangle limit, every
    ///    index refers to a vertex
    pub fn validate(&self, config: &LoaderConfig) -> DmtResult<()> {
        let path = self.path.as_deref();

        if !config.supports_version(self.version) {
            return Err(DmtFileError::new(DmtFileErrorKind::UnsupportedFileFormat)
                .with_path(path)
                .with_versions(self.version, None));
        }

        if self.blocks.is_empty() {
            return Err(DmtFileError::new(DmtFileErrorKind::NoTriangleBlocks).with_path(path));
        }

        for (index, block) in self.blocks.iter().enumerate() {
            self.validate_block(block, config)
                .map_err(|e| e.with_path(path).with_block(index))?;
        }

        Ok(())
    }

    fn validate_block(&self, block: &DmtBlock, config: &LoaderConfig) -> DmtResult<()> {
        if block.version != self.version {
            return Err(DmtFileError::new(DmtFileErrorKind::BlockVersionDoesNotMatchFileVersion)
                .with_versions(self.version, Some(block.version)));
        }
        if block.vertices.is_empty() {
            return Err(DmtFileErrorKind::NoVertices.into());
        }
        if block.triangles.is_empty() {
            return Err(DmtFileErrorKind::NoTriangles.into());
        }
        if block.triangles.len() > config.max_triangles_per_block {
            return Err(DmtFileError::undefined(format!(
                "{} triangles declared, limit is {}",
                block.triangles.len(),
                config.max_triangles_per_block
            )));
        }

        let vertex_count = block.vertices.len();
        for (t, triangle) in block.triangles.iter().enumerate() {
            if let Some(&bad) = triangle.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(DmtFileError::undefined(format!(
                    "triangle {t} references vertex {bad}, block has {vertex_count} vertices"
                )));
            }
        }

        Ok(())
    }

    /// Converts a built model back into records stamped with `version`,
    /// one block per model block.
    ///
    /// Blocks left empty by filtering are skipped since a written block
    /// must have triangles.
    pub fn from_model(model: &DmtModel, version: u32) -> Self {
        let blocks = model
            .blocks()
            .iter()
            .filter(|mesh| !mesh.is_empty())
            .map(|mesh| DmtBlock::new(version, mesh.vertices().to_vec(), mesh.triangles().to_vec()))
            .collect();
        Self {
            path: None,
            version,
            blocks,
        }
    }
}
