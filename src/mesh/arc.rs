//! Deduplicated curved-edge storage.

use std::collections::HashMap;

use crate::math::Point3;

use super::point::PointId;

/// Index of a curved edge in the arc registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArcId(pub(crate) usize);

impl ArcId {
    /// Zero-based position of the arc in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A curved block edge: two vertex indices plus the interpolation point the
/// external mesher bends the edge through.
#[derive(Debug, Clone)]
pub struct ArcEdge {
    /// First endpoint.
    pub a: PointId,
    /// Second endpoint.
    pub b: PointId,
    /// Interpolation point on the curve; not a registered vertex.
    pub midpoint: Point3,
}

/// Deduplicating store of curved edges.
///
/// Identity is the unordered endpoint pair: `(a, b)` and `(b, a)` are the
/// same edge. The midpoint kept is the one supplied when the edge was first
/// inserted; midpoints of later duplicates are discarded, so overlapping
/// generators must agree on edge shapes.
#[derive(Debug, Default)]
pub struct ArcRegistry {
    arcs: Vec<ArcEdge>,
    index: HashMap<(PointId, PointId), ArcId>,
}

impl ArcRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an arc between two registered vertices, returning the index
    /// of the existing arc if the endpoint pair is already present in
    /// either direction.
    pub fn insert(&mut self, a: PointId, b: PointId, midpoint: Point3) -> ArcId {
        let key = if a <= b { (a, b) } else { (b, a) };
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = ArcId(self.arcs.len());
        self.arcs.push(ArcEdge { a, b, midpoint });
        self.index.insert(key, id);
        id
    }

    /// Returns the registered arcs in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[ArcEdge] {
        &self.arcs
    }

    /// Number of registered arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` if no arc has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}
