//! Hexahedral block storage.

use super::point::PointId;

/// Cell count along each local axis of a block.
pub type Resolution = [u32; 3];

/// Geometric expansion ratio along each local axis of a block.
pub type Grading = [f64; 3];

/// Index of a block in its session, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    /// Zero-based position of the block in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One hexahedral cell of the block mesh.
///
/// Corners follow the external mesher's hex convention: vertices 0-3 wind
/// one face, 4-7 the opposite face in the same direction, with 0-4, 1-5,
/// 2-6 and 3-7 forming the connecting edges. Blocks are stored exactly as
/// given; repeating a vertex collapses the corresponding edge, which the
/// mesher accepts for wedge-shaped cells.
#[derive(Debug, Clone)]
pub struct Block {
    /// Corner vertex indices in the fixed hex convention.
    pub corners: [PointId; 8],
    /// Cell subdivision along each local axis.
    pub resolution: Resolution,
    /// Stretching ratio along each local axis.
    pub grading: Grading,
}
