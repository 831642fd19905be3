//! Block-structured hexahedral mesh generation around lofted wing sections.
//!
//! The crate turns 2D aerofoil outlines positioned in 3D space into the
//! block topology an external hex mesher consumes: a deduplicated vertex
//! set, hexahedral blocks, curved edges and named boundary patches,
//! serialized as a `blockMeshDict`. A [`mesh::BlockMesh`] session owns all
//! accumulated state; the [`generate`] operations append O-grid rings and
//! tip caps to it and [`io::dict`] writes the result out.

pub mod error;
pub mod generate;
pub mod io;
pub mod math;
pub mod mesh;
pub mod section;

pub use error::{HexfoilError, Result};
