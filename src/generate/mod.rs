//! Mesh generation operations.
//!
//! [`WingSection`] builds the O-grid ring of blocks between two spanwise
//! aerofoil sections; [`Winglet`] caps the outermost section. Both append
//! to a [`crate::mesh::BlockMesh`] session and rely on its vertex
//! deduplication to stitch neighbouring rings and caps together.

mod wing;
mod winglet;

pub use wing::{wake_point_count, WingSection};
pub use winglet::Winglet;

use std::f64::consts::PI;

use crate::math::Point3;
use crate::mesh::{Grading, Resolution};

/// Name of the far-field patch both generators emit.
pub const FREESTREAM: &str = "freestream";
/// Name of the wing wall patch.
pub const WING: &str = "wing";
/// Name of the symmetry-plane patch emitted at the wing root.
pub const LEFT: &str = "left";

/// Spanwise offset applied to outer-rim vertices, keeping rim cells clear
/// of the section planes and of the neighbouring ring's rim.
const RIM_SPAN_OFFSET: f64 = 0.1;

/// Parameters shared by the O-grid generators.
#[derive(Debug, Clone, Copy)]
pub struct OGridParams {
    /// Radius of the outer cylindrical far-field boundary.
    pub radius: f64,
    /// Cell count of each generated block along its local axes.
    pub resolution: Resolution,
    /// Stretching ratio of each generated block along its local axes.
    pub grading: Grading,
}

impl Default for OGridParams {
    fn default() -> Self {
        Self {
            radius: 15.0,
            resolution: [1, 20, 30],
            grading: [1.0, 100.0, 1.0],
        }
    }
}

/// Polar angle of rim station `k` for a section of `n` points.
///
/// Stations sweep 1.5π: from −0.25π behind the trailing edge, over the
/// leading edge, to 1.25π at station `n - 1`. The remaining quarter turns
/// on each side are closed by the trailing-edge fans.
#[allow(clippy::cast_precision_loss)]
fn rim_angle(k: usize, n: usize) -> f64 {
    (k as f64 / (n - 1) as f64 * 1.5 - 0.25) * PI
}

/// Fan angle of station `k` of `steps`: a quarter-turn sweep from −0.25π
/// down to −0.5π, closing the trailing sector of the rim.
#[allow(clippy::cast_precision_loss)]
fn fan_angle(k: usize, steps: usize) -> f64 {
    (-(k as f64) / steps as f64 * 0.25 - 0.25) * PI
}

/// Point on the outer rim cylinder at polar `angle`, on the upper (+y)
/// side.
fn rim_point(radius: f64, angle: f64, z: f64) -> Point3 {
    Point3::new(-radius * angle.sin(), radius * angle.cos(), z)
}

/// Mirror of [`rim_point`] on the lower (−y) side.
fn rim_point_mirror(radius: f64, angle: f64, z: f64) -> Point3 {
    Point3::new(-radius * angle.sin(), -radius * angle.cos(), z)
}
