//! # DFM Mesh
//!
//! Per-face manufacturability analysis for triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! flat buffers → TriangleMesh → classify_faces → FaceRisk*
//! AbstractRisk* + FeatureCatalog → map_risks_to_faces → FaceRisk*
//! FaceRisk* → heatmap::face_colors → RGB per face
//! ```
//!
//! Classification is strictly local to each triangle; no adjacency is
//! computed.
//!
//! ## Usage
//!
//! ```rust
//! use dfm_mesh::{classify_faces, TriangleMesh};
//!
//! let positions = [0.0f32, 0.0, 0.0, 0.2, 0.0, 0.0, 0.1, 0.1732, 0.0];
//! let mesh = TriangleMesh::from_buffers(&positions, None);
//! let risks: Vec<_> = classify_faces(&mesh).collect();
//! assert_eq!(risks.len(), 1);
//! ```

pub mod classify;
pub mod error;
pub mod heatmap;
pub mod mapping;
pub mod mesh;

pub use classify::{classify_faces, classify_triangle};
pub use error::MeshError;
pub use mapping::map_risks_to_faces;
pub use mesh::TriangleMesh;
