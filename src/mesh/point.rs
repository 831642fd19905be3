//! Deduplicated vertex storage.

use std::collections::HashMap;
use std::fmt;

use crate::math::Point3;

// Canonical precision: six decimal places, held as integer micro-units.
const COORD_SCALE: f64 = 1e6;

/// Index of a vertex in the point registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(crate) usize);

impl PointId {
    /// Zero-based position of the vertex in insertion order, which is also
    /// its position in the serialized vertex list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicating store of mesh vertices.
///
/// Coordinates are rounded to six decimals on insertion and two points that
/// round to the same triple share one index. Corner coordinates computed
/// independently by neighbouring blocks only stitch into shared vertices
/// because of this rounding, so the precision is part of the topology
/// contract. Points are never removed and indices stay stable for the life
/// of the session.
#[derive(Debug, Default)]
pub struct PointRegistry {
    points: Vec<Point3>,
    index: HashMap<[i64; 3], PointId>,
}

impl PointRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, returning the index of the existing entry if an
    /// equal point (at canonical precision) is already registered.
    pub fn insert(&mut self, point: Point3) -> PointId {
        let (key, rounded) = canonical(point);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = PointId(self.points.len());
        self.points.push(rounded);
        self.index.insert(key, id);
        id
    }

    /// Returns the registered points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of registered points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Rounds a point to canonical precision, returning the integer key used
/// for identity together with the rounded coordinates. Rounding through the
/// integer key also collapses `-0.0` onto `0.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn canonical(point: Point3) -> ([i64; 3], Point3) {
    let key = [
        (point.x * COORD_SCALE).round() as i64,
        (point.y * COORD_SCALE).round() as i64,
        (point.z * COORD_SCALE).round() as i64,
    ];
    let rounded = Point3::new(
        key[0] as f64 / COORD_SCALE,
        key[1] as f64 / COORD_SCALE,
        key[2] as f64 / COORD_SCALE,
    );
    (key, rounded)
}
