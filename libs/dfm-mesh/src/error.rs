//! # Mesh Errors
//!
//! Error types for strict mesh construction. The lenient constructors never
//! fail; these are only produced by [`TriangleMesh::validated`].
//!
//! [`TriangleMesh::validated`]: crate::TriangleMesh::validated

use thiserror::Error;

/// Errors that can occur while validating mesh buffers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Position buffer length is not a multiple of 3
    #[error("Position buffer length {len} is not a multiple of 3")]
    MalformedPositions { len: usize },

    /// Index buffer length is not a multiple of 3
    #[error("Index buffer length {len} is not a multiple of 3")]
    MalformedIndices { len: usize },

    /// Non-indexed mesh whose vertex count is not a multiple of 3
    #[error("Vertex count {count} does not form whole triangles")]
    PartialTriangle { count: usize },

    /// Triangle references a missing vertex
    #[error("Face {face} references vertex {index} (vertex count: {vertex_count})")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Vertex with NaN or infinite coordinates
    #[error("Vertex {vertex} has non-finite coordinates")]
    NonFiniteVertex { vertex: usize },
}
