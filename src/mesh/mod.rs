//! Mesh-session state: vertices, blocks, curved edges and boundary patches.

pub mod arc;
pub mod block;
pub mod boundary;
pub mod point;

pub use arc::{ArcEdge, ArcId, ArcRegistry};
pub use block::{Block, BlockId, Grading, Resolution};
pub use boundary::{Boundary, Patch, PatchKind};
pub use point::{PointId, PointRegistry};

use crate::math::Point3;

/// A pair of patch names once intended for post-hoc face merging.
///
/// Pairs are collected so drivers can keep declaring them, but the writer
/// emits an empty `mergePatchPairs` section regardless; the generated
/// topology shares vertices outright instead of merging patch faces.
#[derive(Debug, Clone)]
pub struct MergePair {
    /// Master patch name.
    pub master: String,
    /// Slave patch name.
    pub slave: String,
}

/// One mesh-construction session.
///
/// The session owns the deduplicated vertex set, the hexahedral blocks, the
/// curved edges and the named boundary patches a driver accumulates before
/// serialization. Generators mutate it through the `add_*` methods; the
/// writer reads it back through the accessor slices. Sessions are
/// independent of one another.
#[derive(Debug, Default)]
pub struct BlockMesh {
    points: PointRegistry,
    blocks: Vec<Block>,
    arcs: ArcRegistry,
    boundary: Boundary,
    merge_pairs: Vec<MergePair>,
}

impl BlockMesh {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a point and returns its stable index.
    ///
    /// Coordinates are deduplicated at canonical precision; see
    /// [`PointRegistry`].
    pub fn add_point(&mut self, point: Point3) -> PointId {
        self.points.insert(point)
    }

    /// Registers a curved edge between two coordinates.
    ///
    /// Both endpoints are resolved through the point registry first. If an
    /// arc between the resulting vertex pair already exists, in either
    /// direction, its index is returned and `midpoint` is discarded.
    pub fn add_arc(&mut self, a: Point3, b: Point3, midpoint: Point3) -> ArcId {
        let a = self.points.insert(a);
        let b = self.points.insert(b);
        self.arcs.insert(a, b, midpoint)
    }

    /// Appends a hexahedral block, resolving the eight corner coordinates
    /// through the point registry in order.
    ///
    /// Blocks are never deduplicated: repeated calls append repeated
    /// blocks.
    pub fn add_block(
        &mut self,
        corners: [Point3; 8],
        resolution: Resolution,
        grading: Grading,
    ) -> BlockId {
        let corners = corners.map(|p| self.points.insert(p));
        let id = BlockId(self.blocks.len());
        self.blocks.push(Block {
            corners,
            resolution,
            grading,
        });
        id
    }

    /// Adds one oriented quad face to the named boundary patch, creating
    /// the patch with `kind` on first use (later kinds are ignored).
    pub fn add_face(&mut self, name: &str, corners: [Point3; 4], kind: PatchKind) {
        let face = corners.map(|p| self.points.insert(p));
        self.boundary.add_face(name, face, kind);
    }

    /// Collects a patch pair for post-hoc merging.
    ///
    /// Collected pairs are not serialized; the merge section of the output
    /// stays empty.
    pub fn add_merge_pair(&mut self, pair: MergePair) {
        self.merge_pairs.push(pair);
    }

    /// Returns the registered vertices in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        self.points.points()
    }

    /// Returns the blocks in creation order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the curved edges in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[ArcEdge] {
        self.arcs.arcs()
    }

    /// Returns the boundary patches in first-registration order.
    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        self.boundary.patches()
    }

    /// Returns the collected merge pairs.
    #[must_use]
    pub fn merge_pairs(&self) -> &[MergePair] {
        &self.merge_pairs
    }
}
