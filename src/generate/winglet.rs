//! Tip-cap generation over the outermost section.

use crate::error::{GenerateError, Result};
use crate::math::Point3;
use crate::mesh::{BlockMesh, PatchKind};
use crate::section::Section;

use super::{
    fan_angle, rim_angle, rim_point, rim_point_mirror, OGridParams, FREESTREAM, RIM_SPAN_OFFSET,
    WING,
};

/// Caps the tip section with a closed shell of hexahedral blocks.
///
/// Each mirror pair of surface points carries one block spanning from the
/// upper to the lower surface and out to the rim. Edges lying on the local
/// circular cross-section are registered as arcs so the cap follows the
/// section's curvature instead of its facets, and a fan of collapsed
/// blocks closes the shell behind the trailing edge. The rim sits at the
/// same lifted span level as a neighbouring ring's outboard rim, so cap
/// and ring stitch together without explicit merging.
pub struct Winglet<'a> {
    section: &'a Section,
    params: OGridParams,
}

impl<'a> Winglet<'a> {
    /// Creates the cap operation over `section`.
    #[must_use]
    pub fn new(section: &'a Section, params: OGridParams) -> Self {
        Self { section, params }
    }

    /// Executes the operation, appending blocks, arcs and faces to the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the rim radius is not positive.
    pub fn execute(&self, mesh: &mut BlockMesh) -> Result<()> {
        if self.params.radius <= 0.0 {
            return Err(GenerateError::Degenerate("rim radius must be positive".into()).into());
        }

        let n = self.section.len();
        let radius = self.params.radius;

        for i in 0..n / 2 {
            let p0 = *self.section.point(i);
            let p1 = *self.section.point(i + 1);
            let m0 = *self.section.point(n - 1 - i);
            let m1 = *self.section.point(n - 2 - i);

            let a_i = rim_angle(i, n);
            let a_j = rim_angle(i + 1, n);

            // Local cross-section circle at each station: centred between
            // the mirror pair, radius half the pair's separation.
            let c_i = midpoint(p0, m0);
            let c_j = midpoint(p1, m1);
            let r_i = (m0.y - p0.y).abs() / 2.0;
            let r_j = (m1.y - p1.y).abs() / 2.0;

            let corners = [
                p1,
                p0,
                rim_point(radius, a_i, p0.z + RIM_SPAN_OFFSET),
                rim_point(radius, a_j, p1.z + RIM_SPAN_OFFSET),
                m1,
                m0,
                rim_point_mirror(radius, a_i, p0.z + RIM_SPAN_OFFSET),
                rim_point_mirror(radius, a_j, p1.z + RIM_SPAN_OFFSET),
            ];
            mesh.add_block(corners, self.params.resolution, self.params.grading);

            // Surface edges bow out to the local circle; rim edges follow
            // the outer cap. Degenerate pairs (coincident mirror points)
            // and the merged rim at the leading edge get no arc.
            if r_i > 0.0 {
                mesh.add_arc(
                    corners[1],
                    corners[5],
                    Point3::new(c_i.x, c_i.y, c_i.z + r_i),
                );
            }
            if r_j > 0.0 {
                mesh.add_arc(
                    corners[0],
                    corners[4],
                    Point3::new(c_j.x, c_j.y, c_j.z + r_j),
                );
            }
            if i < n / 2 - 1 {
                mesh.add_arc(
                    corners[2],
                    corners[6],
                    Point3::new(-radius * a_i.sin(), 0.0, c_i.z + radius * a_i.cos()),
                );
                mesh.add_arc(
                    corners[3],
                    corners[7],
                    Point3::new(-radius * a_j.sin(), 0.0, c_j.z + radius * a_j.cos()),
                );
            }

            mesh.add_face(
                FREESTREAM,
                [corners[2], corners[3], corners[7], corners[6]],
                PatchKind::Patch,
            );
            mesh.add_face(
                WING,
                [corners[0], corners[1], corners[5], corners[4]],
                PatchKind::Wall,
            );
        }

        self.trailing_fan(mesh);

        tracing::debug!(
            blocks = mesh.blocks().len(),
            arcs = mesh.arcs().len(),
            "generated winglet cap"
        );
        Ok(())
    }

    /// Fan of collapsed blocks closing the cap behind the trailing edge.
    fn trailing_fan(&self, mesh: &mut BlockMesh) {
        let n = self.section.len();
        let radius = self.params.radius;
        let steps = n / 8;
        let te = *self.section.point(0);

        for i in 0..steps {
            let a_i = fan_angle(i + 1, steps);
            let a_j = fan_angle(i, steps);

            let corners = [
                te,
                te,
                rim_point(radius, a_i, te.z + RIM_SPAN_OFFSET),
                rim_point(radius, a_j, te.z + RIM_SPAN_OFFSET),
                te,
                te,
                rim_point_mirror(radius, a_i, te.z + RIM_SPAN_OFFSET),
                rim_point_mirror(radius, a_j, te.z + RIM_SPAN_OFFSET),
            ];
            mesh.add_block(corners, self.params.resolution, self.params.grading);
            mesh.add_arc(
                corners[3],
                corners[7],
                Point3::new(-radius * a_j.sin(), 0.0, te.z + radius * a_j.cos()),
            );
            mesh.add_face(
                FREESTREAM,
                [corners[2], corners[3], corners[7], corners[6]],
                PatchKind::Patch,
            );
        }
    }
}

/// Component-wise midpoint of two points.
fn midpoint(a: Point3, b: Point3) -> Point3 {
    Point3::new(
        (a.x + b.x) * 0.5,
        (a.y + b.y) * 0.5,
        (a.z + b.z) * 0.5,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::error::HexfoilError;
    use crate::generate::WingSection;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn octo(z: f64) -> Section {
        Section::new(vec![
            p(1.0, 0.1, z),
            p(0.75, 0.15, z),
            p(0.5, 0.15, z),
            p(0.25, 0.1, z),
            p(0.0, 0.0, z),
            p(0.25, -0.1, z),
            p(0.5, -0.15, z),
            p(0.75, -0.1, z),
        ])
        .unwrap()
    }

    /// Like [`octo`] but with the trailing-edge point duplicated at the end
    /// of the loop, as closed coordinate files often do.
    fn octo_closed_te(z: f64) -> Section {
        Section::new(vec![
            p(1.0, 0.0, z),
            p(0.75, 0.1, z),
            p(0.5, 0.15, z),
            p(0.25, 0.1, z),
            p(0.0, 0.0, z),
            p(0.25, -0.1, z),
            p(0.5, -0.15, z),
            p(1.0, 0.0, z),
        ])
        .unwrap()
    }

    fn small_params() -> OGridParams {
        OGridParams {
            radius: 10.0,
            resolution: [1, 2, 2],
            grading: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn cap_emits_blocks_faces_and_arcs() {
        let tip = octo(4.0);
        let mut mesh = BlockMesh::new();
        Winglet::new(&tip, small_params()).execute(&mut mesh).unwrap();

        // Four mirror-pair blocks plus one fan step.
        assert_eq!(mesh.blocks().len(), 5);

        let names: Vec<&str> = mesh.patches().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["freestream", "wing"]);
        assert_eq!(mesh.patches()[0].faces.len(), 5);
        assert_eq!(mesh.patches()[1].faces.len(), 4);

        // Four surface arcs (one per mirror pair; the forward-edge arc of
        // each step duplicates the next step's) and four rim arcs; the
        // fan's single arc duplicates the first rim arc.
        assert_eq!(mesh.arcs().len(), 8);
    }

    #[test]
    fn coincident_trailing_edge_pair_gets_no_surface_arc() {
        let tip = octo_closed_te(4.0);
        let mut mesh = BlockMesh::new();
        Winglet::new(&tip, small_params()).execute(&mut mesh).unwrap();

        // One surface arc fewer than the open-trailing-edge cap.
        assert_eq!(mesh.arcs().len(), 7);
    }

    #[test]
    fn arc_endpoints_are_registered_vertices() {
        let tip = octo(4.0);
        let mut mesh = BlockMesh::new();
        Winglet::new(&tip, small_params()).execute(&mut mesh).unwrap();

        let count = mesh.points().len();
        for arc in mesh.arcs() {
            assert!(arc.a.index() < count);
            assert!(arc.b.index() < count);
            assert_ne!(arc.a, arc.b);
        }
    }

    #[test]
    fn surface_arc_midpoints_bulge_spanwise() {
        let tip = octo(4.0);
        let mut mesh = BlockMesh::new();
        Winglet::new(&tip, small_params()).execute(&mut mesh).unwrap();

        // The first arc belongs to the trailing-edge mirror pair (1.0, 0.1)
        // and (0.75, -0.1): centre x = 0.875, local radius 0.1, bulge in +z.
        let arc = &mesh.arcs()[0];
        assert!((arc.midpoint.x - 0.875).abs() < 1e-9);
        assert!(arc.midpoint.y.abs() < 1e-9);
        assert!((arc.midpoint.z - 4.1).abs() < 1e-9);
    }

    #[test]
    fn cap_reuses_the_ring_rim_without_new_vertices() {
        let root = octo(0.0);
        let tip = octo(4.0);
        let mut mesh = BlockMesh::new();
        WingSection::new(&root, &tip, 1.0, small_params())
            .execute(&mut mesh)
            .unwrap();
        let before = mesh.points().len();

        Winglet::new(&tip, small_params()).execute(&mut mesh).unwrap();

        // Every cap vertex (tip section and lifted rim) already exists in
        // the ring; the cap adds topology, not geometry.
        assert_eq!(mesh.points().len(), before);
        assert!(!mesh.arcs().is_empty());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let tip = octo(4.0);
        let params = OGridParams {
            radius: -1.0,
            ..small_params()
        };
        let mut mesh = BlockMesh::new();
        let result = Winglet::new(&tip, params).execute(&mut mesh);
        assert!(matches!(
            result,
            Err(HexfoilError::Generate(GenerateError::Degenerate(_)))
        ));
    }
}
