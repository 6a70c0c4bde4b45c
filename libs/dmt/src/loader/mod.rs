//! # DMT Loader
//!
//! Builds a [`DmtModel`] from parsed [`DmtFile`] records, consulting a
//! [`TriangleFilter`] for every candidate triangle.
//!
//! ## Contract
//!
//! - The whole file is validated before any triangle is offered to the
//!   filter. Any failure aborts the load; no partial model is returned.
//! - The filter is asked exactly once per triangle, in source order, before
//!   the triangle touches the mesh.
//! - Vertices are registered lazily: a block vertex is added to the built
//!   mesh when the first admitted triangle referencing it is added. A vertex
//!   referenced only by rejected triangles is discarded. A vertex shared by
//!   several admitted triangles is added once.
//! - Every source block produces one model block, even if the filter
//!   rejected all of its triangles.

use rayon::prelude::*;
use std::ops::AddAssign;
use tracing::{debug, trace};

use crate::config::LoaderConfig;
use crate::error::DmtResult;
use crate::filter::TriangleFilter;
use crate::mesh::{Mesh, NO_INDEX};
use crate::model::DmtModel;
use crate::records::{DmtBlock, DmtFile};

/// Triangle counts gathered during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Triangles offered to the filter.
    pub offered: usize,
    /// Triangles the filter admitted.
    pub accepted: usize,
    /// Triangles the filter rejected.
    pub rejected: usize,
}

impl AddAssign for LoadReport {
    fn add_assign(&mut self, rhs: Self) {
        self.offered += rhs.offered;
        self.accepted += rhs.accepted;
        self.rejected += rhs.rejected;
    }
}

/// Loads DMT records through a single triangle filter.
///
/// # Examples
/// ```
/// use dmt_mesh::{DmtBlock, DmtFile, DmtLoader, NoFilter};
/// use glam::DVec3;
///
/// let file = DmtFile::new(2).with_block(DmtBlock::new(
///     2,
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
///     vec![[0, 1, 2], [0, 1, 3]],
/// ));
/// let model = DmtLoader::new(&NoFilter).load(&file).unwrap();
/// assert_eq!(model.triangle_count(), 2);
/// ```
pub struct DmtLoader<'f> {
    filter: &'f dyn TriangleFilter,
    config: LoaderConfig,
}

impl<'f> DmtLoader<'f> {
    /// Creates a loader with the default configuration.
    pub fn new(filter: &'f dyn TriangleFilter) -> Self {
        Self {
            filter,
            config: LoaderConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Validates `file` and builds the model.
    pub fn load(&self, file: &DmtFile) -> DmtResult<DmtModel> {
        self.load_with_report(file).map(|(model, _)| model)
    }

    /// Like [`DmtLoader::load`], also returning admission counts.
    pub fn load_with_report(&self, file: &DmtFile) -> DmtResult<(DmtModel, LoadReport)> {
        file.validate(&self.config)?;
        Self::log_start(file, false);

        let mut model = DmtModel::new();
        let mut report = LoadReport::default();
        for (index, block) in file.blocks.iter().enumerate() {
            let (mesh, block_report) = self.admit_block(index, block);
            model.add_block(mesh);
            report += block_report;
        }

        Self::log_summary(&model, &report);
        Ok((model, report))
    }

    /// Like [`DmtLoader::load_with_report`], admitting blocks on the rayon
    /// thread pool.
    ///
    /// Triangle order is kept within each block and block order is kept in
    /// the model, but triangles from different blocks reach the filter in no
    /// particular order. Stateful filters see a different interleaving than
    /// with a sequential load.
    pub fn load_parallel(&self, file: &DmtFile) -> DmtResult<(DmtModel, LoadReport)> {
        file.validate(&self.config)?;
        Self::log_start(file, true);

        let admitted: Vec<(Mesh, LoadReport)> = file
            .blocks
            .par_iter()
            .enumerate()
            .map(|(index, block)| self.admit_block(index, block))
            .collect();

        let mut model = DmtModel::new();
        let mut report = LoadReport::default();
        for (mesh, block_report) in admitted {
            model.add_block(mesh);
            report += block_report;
        }

        Self::log_summary(&model, &report);
        Ok((model, report))
    }

    /// Runs admission over one validated block.
    fn admit_block(&self, index: usize, block: &DmtBlock) -> (Mesh, LoadReport) {
        let mut mesh = Mesh::with_capacity(block.vertices.len(), block.triangles.len());
        let mut remap = vec![NO_INDEX; block.vertices.len()];
        let mut report = LoadReport::default();

        for (t, triangle) in block.triangles.iter().enumerate() {
            let [a, b, c] = triangle.map(|i| block.vertices[i as usize]);
            report.offered += 1;

            if !self.filter.can_add_triangle(a, b, c) {
                report.rejected += 1;
                trace!(block = index, triangle = t, "triangle rejected by filter");
                continue;
            }

            let ids = triangle.map(|i| {
                let slot = &mut remap[i as usize];
                if *slot == NO_INDEX {
                    *slot = mesh.add_vertex(block.vertices[i as usize]);
                }
                *slot
            });
            mesh.add_triangle(ids[0], ids[1], ids[2]);
            report.accepted += 1;
        }

        (mesh, report)
    }

    fn log_start(file: &DmtFile, parallel: bool) {
        debug!(
            path = ?file.path,
            version = file.version,
            blocks = file.blocks.len(),
            triangles = file.triangle_count(),
            parallel,
            "loading DMT file"
        );
    }

    fn log_summary(model: &DmtModel, report: &LoadReport) {
        debug!(
            blocks = model.block_count(),
            vertices = model.vertex_count(),
            accepted = report.accepted,
            rejected = report.rejected,
            "DMT load complete"
        );
    }
}

impl std::fmt::Debug for DmtLoader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DmtLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
