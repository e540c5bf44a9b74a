//! # Mesh Data Structure
//!
//! Read-only triangle mesh built from flat GPU-style buffers.

use glam::DVec3;

use crate::error::MeshError;

/// A triangle mesh, either indexed or non-indexed.
///
/// In a non-indexed mesh every consecutive triple of vertices forms one
/// triangle. In an indexed mesh every index triple selects the vertices of
/// one triangle. Face indices are ordinal in both cases.
///
/// All geometry uses f64 internally; buffers may be supplied as f32 or f64.
///
/// # Example
///
/// ```rust
/// use dfm_mesh::TriangleMesh;
///
/// let positions = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0];
/// let indices = [0u32, 1, 2, 1, 3, 2];
/// let mesh = TriangleMesh::from_buffers(&positions, Some(&indices[..]));
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions
    positions: Vec<DVec3>,
    /// Index triples, one per triangle, when the mesh is indexed
    indices: Option<Vec<[u32; 3]>>,
}

impl TriangleMesh {
    /// Creates an empty non-indexed mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from flat buffers without validation.
    ///
    /// Trailing values that do not complete a vertex or an index triple are
    /// ignored. Out-of-range indices and non-finite coordinates are kept; the
    /// affected faces are reported as degenerate by [`TriangleMesh::triangle`].
    pub fn from_buffers<P>(positions: &[P], indices: Option<&[u32]>) -> Self
    where
        P: Copy + Into<f64>,
    {
        let positions = positions
            .chunks_exact(3)
            .map(|c| DVec3::new(c[0].into(), c[1].into(), c[2].into()))
            .collect();
        let indices = indices.map(|flat| {
            flat.chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect()
        });
        Self { positions, indices }
    }

    /// Builds a mesh from flat buffers, rejecting malformed data.
    pub fn validated<P>(positions: &[P], indices: Option<&[u32]>) -> Result<Self, MeshError>
    where
        P: Copy + Into<f64>,
    {
        if positions.len() % 3 != 0 {
            return Err(MeshError::MalformedPositions {
                len: positions.len(),
            });
        }
        if let Some(flat) = indices {
            if flat.len() % 3 != 0 {
                return Err(MeshError::MalformedIndices { len: flat.len() });
            }
        }

        let mesh = Self::from_buffers(positions, indices);

        if let Some(vertex) = mesh.positions.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFiniteVertex { vertex });
        }

        match &mesh.indices {
            Some(triangles) => {
                let vertex_count = mesh.positions.len();
                for (face, tri) in triangles.iter().enumerate() {
                    if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                        return Err(MeshError::IndexOutOfRange {
                            face,
                            index,
                            vertex_count,
                        });
                    }
                }
            }
            None if mesh.positions.len() % 3 != 0 => {
                return Err(MeshError::PartialTriangle {
                    count: mesh.positions.len(),
                });
            }
            None => {}
        }

        Ok(mesh)
    }

    /// Builds a non-indexed mesh from explicit triangles.
    pub fn from_triangles(triangles: &[[DVec3; 3]]) -> Self {
        Self {
            positions: triangles.iter().flatten().copied().collect(),
            indices: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(triangles) => triangles.len(),
            None => self.positions.len() / 3,
        }
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Returns true if triangles are selected through an index buffer.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the corner positions of a face.
    ///
    /// `None` when the face does not exist or references a missing vertex.
    pub fn triangle(&self, face: usize) -> Option<[DVec3; 3]> {
        match &self.indices {
            Some(triangles) => {
                let [a, b, c] = *triangles.get(face)?;
                Some([
                    *self.positions.get(a as usize)?,
                    *self.positions.get(b as usize)?,
                    *self.positions.get(c as usize)?,
                ])
            }
            None => {
                let base = face.checked_mul(3)?;
                let corners = self.positions.get(base..base.checked_add(3)?)?;
                Some([corners[0], corners[1], corners[2]])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_new() {
        let mesh = TriangleMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.triangle(0).is_none());
    }

    #[test]
    fn test_non_indexed_triangle_count() {
        let positions = [0.0f64; 9 * 2];
        let mesh = TriangleMesh::from_buffers(&positions, None);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_indexed());
    }

    #[test]
    fn test_trailing_values_ignored() {
        let positions = [1.0f32, 2.0, 3.0, 4.0];
        let mesh = TriangleMesh::from_buffers(&positions, Some(&[0u32, 0, 0, 1][..]));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_indexed_triangle_lookup() {
        let positions = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let mesh = TriangleMesh::from_buffers(&positions, Some(&[2u32, 1, 0][..]));
        let [a, b, c] = mesh.triangle(0).unwrap();
        assert_eq!(a, DVec3::Y);
        assert_eq!(b, DVec3::X);
        assert_eq!(c, DVec3::ZERO);
    }

    #[test]
    fn test_out_of_range_index_is_missing_face() {
        let positions = [0.0f32; 9];
        let mesh = TriangleMesh::from_buffers(&positions, Some(&[0u32, 1, 7][..]));
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.triangle(0).is_none());
    }

    #[test]
    fn test_validated_rejects_malformed() {
        assert_eq!(
            TriangleMesh::validated(&[0.0f32; 4], None).unwrap_err(),
            MeshError::MalformedPositions { len: 4 }
        );
        assert_eq!(
            TriangleMesh::validated(&[0.0f32; 9], Some(&[0u32, 1][..])).unwrap_err(),
            MeshError::MalformedIndices { len: 2 }
        );
        assert_eq!(
            TriangleMesh::validated(&[0.0f32; 6], None).unwrap_err(),
            MeshError::PartialTriangle { count: 2 }
        );
        assert!(matches!(
            TriangleMesh::validated(&[0.0f32; 9], Some(&[0u32, 1, 3][..])),
            Err(MeshError::IndexOutOfRange { face: 0, index: 3, .. })
        ));
        assert_eq!(
            TriangleMesh::validated(&[0.0, f64::NAN, 0.0], Some(&[][..])).unwrap_err(),
            MeshError::NonFiniteVertex { vertex: 0 }
        );
    }
}
