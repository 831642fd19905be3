//! Generates a blockMeshDict for a straight NACA wing with a tip cap.
//!
//! Mirrors a typical driver workflow: build a root and a tip section from
//! one normalized profile, run the ring generator between them, cap the
//! tip, and serialize. The dictionary lands in `blockMeshDict` in the
//! working directory; set `RUST_LOG=debug` to watch the generators work.

use hexfoil::generate::{OGridParams, WingSection, Winglet};
use hexfoil::math::{Point2, Point3};
use hexfoil::mesh::BlockMesh;
use hexfoil::section::Section;
use hexfoil::{io, Result};

use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // NACA 2411, 40 stations per surface.
    let profile = naca4(0.02, 0.4, 0.11, 40);

    let root = Section::from_profile(&profile, Point3::new(-0.958, 0.0, 0.0), 2.143)?;
    let tip = Section::from_profile(&profile, Point3::new(-0.473, 0.109, 4.215), 1.050)?;

    let mut mesh = BlockMesh::new();
    WingSection::new(&root, &tip, 0.95, OGridParams::default()).execute(&mut mesh)?;
    Winglet::new(
        &tip,
        OGridParams {
            resolution: [1, 20, 20],
            ..OGridParams::default()
        },
    )
    .execute(&mut mesh)?;

    io::dict::save(&mesh, "blockMeshDict")?;
    println!(
        "blockMeshDict: {} vertices, {} blocks, {} arcs, {} patches",
        mesh.points().len(),
        mesh.blocks().len(),
        mesh.arcs().len(),
        mesh.patches().len()
    );
    Ok(())
}

/// Closed NACA 4-digit outline with `steps` points per surface, running
/// from the trailing edge over the upper surface to the leading edge and
/// back along the lower surface.
#[allow(clippy::cast_precision_loss)]
fn naca4(camber: f64, camber_pos: f64, thickness: f64, steps: usize) -> Vec<Point2> {
    let mut profile = Vec::with_capacity(2 * steps);
    for k in 0..steps {
        let x = 1.0 - k as f64 / steps as f64;
        let (yc, yt) = camber_and_thickness(x, camber, camber_pos, thickness);
        profile.push(Point2::new(x, yc + yt));
    }
    for k in 0..steps {
        let x = k as f64 / steps as f64;
        let (yc, yt) = camber_and_thickness(x, camber, camber_pos, thickness);
        profile.push(Point2::new(x, yc - yt));
    }
    profile
}

/// Camber line and half-thickness of a NACA 4-digit profile at chord
/// fraction `x`.
fn camber_and_thickness(x: f64, m: f64, p: f64, t: f64) -> (f64, f64) {
    let yc = if x < p {
        m / (p * p) * (2.0 * p * x - x * x)
    } else {
        m / ((1.0 - p) * (1.0 - p)) * (1.0 - 2.0 * p + 2.0 * p * x - x * x)
    };
    let yt = 5.0
        * t
        * (0.2969 * x.sqrt() - 0.126 * x - 0.3516 * x * x + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4));
    (yc, yt)
}
