//! # Mesh Data Structure
//!
//! A single triangle block: vertex positions in millimetres and index
//! triples into them.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

/// Sentinel for "no vertex assigned yet" in index remapping tables.
pub const NO_INDEX: u32 = u32::MAX;

/// A triangle mesh with vertices and indices.
///
/// # Example
///
/// ```rust
/// use dmt_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    ///
    /// # Panics
    /// If `index` is not below `vertex_count()`. See [`Mesh::get_vertex`].
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the vertex at the given index, or `None` if out of range.
    #[inline]
    pub fn get_vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    /// Returns the triangle at the given index.
    ///
    /// # Panics
    /// If `index` is not below `triangle_count()`. See [`Mesh::get_triangle`].
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the triangle at the given index, or `None` if out of range.
    #[inline]
    pub fn get_triangle(&self, index: usize) -> Option<[u32; 3]> {
        self.triangles.get(index).copied()
    }

    /// Returns the three corner positions of triangle `index`.
    ///
    /// # Panics
    /// If `index` is out of range or the triangle references a missing
    /// vertex. See [`Mesh::get_triangle_vertices`].
    pub fn triangle_vertices(&self, index: usize) -> [DVec3; 3] {
        self.triangles[index].map(|v| self.vertex(v))
    }

    /// Returns the three corner positions of triangle `index`, or `None` if
    /// the triangle or one of its vertices does not exist.
    pub fn get_triangle_vertices(&self, index: usize) -> Option<[DVec3; 3]> {
        let [a, b, c] = self.get_triangle(index)?;
        Some([self.get_vertex(a)?, self.get_vertex(b)?, self.get_vertex(c)?])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
            triangle_area(v0, v1, v2) > DEGENERATE_AREA_EPSILON
        })
    }
}

/// Area of the triangle `(a, b, c)` in square millimetres.
#[inline]
pub fn triangle_area(a: DVec3, b: DVec3, c: DVec3) -> f64 {
    0.5 * (b - a).cross(c - a).length()
}
