//! # DMT Model
//!
//! An ordered collection of triangle blocks built by the loader.

use glam::DVec3;

use crate::mesh::Mesh;

/// A triangulated solid made of one or more triangle blocks.
///
/// Block order matches the order of the source records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DmtModel {
    blocks: Vec<Mesh>,
}

impl DmtModel {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a triangle block.
    pub fn add_block(&mut self, block: Mesh) {
        self.blocks.push(block);
    }

    /// The triangle blocks in order.
    #[inline]
    pub fn blocks(&self) -> &[Mesh] {
        &self.blocks
    }

    /// Number of triangle blocks.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total vertices over all blocks.
    pub fn vertex_count(&self) -> usize {
        self.blocks.iter().map(Mesh::vertex_count).sum()
    }

    /// Total triangles over all blocks.
    pub fn triangle_count(&self) -> usize {
        self.blocks.iter().map(Mesh::triangle_count).sum()
    }

    /// Returns true if no block holds a triangle.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Mesh::is_empty)
    }

    /// Axis-aligned bounding box over every block, `None` if there are no
    /// vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.blocks
            .iter()
            .filter_map(Mesh::bounding_box)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }

    /// Concatenates every block into a single mesh.
    pub fn flatten(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.vertex_count(), self.triangle_count());
        for block in &self.blocks {
            mesh.merge(block);
        }
        mesh
    }
}
