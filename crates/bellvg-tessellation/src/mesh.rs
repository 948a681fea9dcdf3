//! Triangle mesh output types.

use bytemuck::{Pod, Zeroable};

use bellvg_core::color::PackedSrgb;

/// A set of vertices and indices representing a list of triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Indexed<T> {
    /// The vertices of the mesh
    pub vertices: Vec<T>,

    /// The list of vertex indices that defines the triangles of the mesh.
    ///
    /// Therefore, this list should always have a length that is a multiple of 3.
    pub indices: Vec<u32>,
}

impl<T> Indexed<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl<T> Default for Indexed<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-dimensional vertex with a color.
#[derive(Copy, Clone, Debug, PartialEq, Zeroable, Pod)]
#[repr(C)]
pub struct SolidVertex2D {
    /// The vertex position in 2D space.
    pub position: [f32; 2],

    /// The color of the vertex.
    pub color: PackedSrgb,
}

impl SolidVertex2D {
    pub fn new(position: impl Into<[f32; 2]>, color: impl Into<PackedSrgb>) -> Self {
        Self {
            position: position.into(),
            color: color.into(),
        }
    }
}

/// A mesh of triangles with solid-colored vertices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SolidMesh {
    /// The vertices and indices of the mesh.
    pub buffers: Indexed<SolidVertex2D>,
}

impl SolidMesh {
    pub fn new() -> Self {
        Self::default()
    }
}
