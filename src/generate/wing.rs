//! O-grid ring generation between two spanwise sections.

use crate::error::{GenerateError, Result, SectionError};
use crate::math::Point3;
use crate::mesh::{BlockMesh, PatchKind};
use crate::section::Section;

use super::{
    fan_angle, rim_angle, rim_point, rim_point_mirror, OGridParams, FREESTREAM, LEFT,
    RIM_SPAN_OFFSET, WING,
};

/// Builds the ring of hexahedral blocks between two spanwise sections.
///
/// Each step along the upper surface produces one block on the upper side
/// and one mirrored block on the lower side, both projecting out to the
/// rim cylinder. Steps inside the trailing-edge wake additionally emit the
/// thin closure block bridging the two surfaces, and a fan of collapsed
/// blocks closes the trailing sector so the ring is watertight. Boundary
/// faces land on the `freestream`, `wing` and, for a ring starting at the
/// symmetry plane, `left` patches.
pub struct WingSection<'a> {
    root: &'a Section,
    tip: &'a Section,
    cut_fraction: f64,
    params: OGridParams,
}

impl<'a> WingSection<'a> {
    /// Creates the operation between `root` (inboard) and `tip` (outboard).
    ///
    /// `cut_fraction` is the chord station, measured from the leading edge,
    /// where the wake region begins: surface steps aft of it are closed
    /// with wake blocks instead of wall faces.
    #[must_use]
    pub fn new(
        root: &'a Section,
        tip: &'a Section,
        cut_fraction: f64,
        params: OGridParams,
    ) -> Self {
        Self {
            root,
            tip,
            cut_fraction,
            params,
        }
    }

    /// Executes the operation, appending blocks, faces and vertices to the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the two sections have different point counts,
    /// `cut_fraction` lies outside `[0, 1]` or the rim radius is not
    /// positive.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self, mesh: &mut BlockMesh) -> Result<()> {
        self.validate()?;

        let n = self.root.len();
        let radius = self.params.radius;
        let wake_steps = wake_point_count(self.root, self.cut_fraction);
        // A ring starting at z = 0 sits on the symmetry plane and keeps its
        // inboard rim there; rings further out lift both rim sides.
        let span = self.root.point(0).z;
        let interior = span > 0.0;
        let on_plane = span == 0.0;

        for i in 0..n / 2 {
            let a_i = rim_angle(i, n);
            let a_j = rim_angle(i + 1, n);

            let r0 = *self.root.point(i);
            let r1 = *self.root.point(i + 1);
            let t0 = *self.tip.point(i);
            let t1 = *self.tip.point(i + 1);
            let mr0 = *self.root.point(n - 1 - i);
            let mr1 = *self.root.point(n - 2 - i);
            let mt0 = *self.tip.point(n - 1 - i);
            let mt1 = *self.tip.point(n - 2 - i);

            let mut upper = [
                r1,
                r0,
                rim_point(radius, a_i, r0.z),
                rim_point(radius, a_j, r1.z),
                t1,
                t0,
                rim_point(radius, a_i, t0.z),
                rim_point(radius, a_j, t1.z),
            ];
            // The mirrored block swaps root and tip so its orientation
            // stays consistent with the upper one.
            let mut lower = [
                mt1,
                mt0,
                rim_point_mirror(radius, a_i, mt0.z),
                rim_point_mirror(radius, a_j, mt1.z),
                mr1,
                mr0,
                rim_point_mirror(radius, a_i, mr0.z),
                rim_point_mirror(radius, a_j, mr1.z),
            ];
            offset_rim(&mut upper, &mut lower, interior);

            mesh.add_block(upper, self.params.resolution, self.params.grading);
            mesh.add_block(lower, self.params.resolution, self.params.grading);

            mesh.add_face(
                FREESTREAM,
                [upper[2], upper[3], upper[6], upper[7]],
                PatchKind::Patch,
            );
            mesh.add_face(
                FREESTREAM,
                [lower[2], lower[3], lower[6], lower[7]],
                PatchKind::Patch,
            );
            if on_plane {
                mesh.add_face(
                    LEFT,
                    [upper[3], upper[2], upper[1], upper[0]],
                    PatchKind::Symmetry,
                );
                mesh.add_face(
                    LEFT,
                    [lower[4], lower[5], lower[6], lower[7]],
                    PatchKind::Symmetry,
                );
            }

            // Wake steps close the open trailing edge between the two
            // surfaces; the remaining steps carry the wall on the ring
            // blocks themselves.
            if i < wake_steps {
                mesh.add_block(
                    [
                        lower[4], lower[5], upper[1], upper[0], lower[0], lower[1], upper[5],
                        upper[4],
                    ],
                    [self.params.resolution[0], 1, self.params.resolution[2]],
                    [1.0, 1.0, 1.0],
                );
                mesh.add_face(
                    WING,
                    [lower[4], lower[5], upper[1], upper[0]],
                    PatchKind::Wall,
                );
                mesh.add_face(
                    WING,
                    [lower[0], lower[1], upper[5], upper[4]],
                    PatchKind::Wall,
                );
            }
            if i >= wake_steps {
                mesh.add_face(
                    WING,
                    [upper[5], upper[4], upper[1], upper[0]],
                    PatchKind::Wall,
                );
                mesh.add_face(
                    WING,
                    [lower[0], lower[1], lower[5], lower[4]],
                    PatchKind::Wall,
                );
            }
            if i == wake_steps && i != 0 {
                // Seam quad between the wake closure and the wall surface.
                mesh.add_face(
                    WING,
                    [lower[5], lower[1], upper[5], upper[1]],
                    PatchKind::Wall,
                );
            }
        }

        self.trailing_fan(mesh, interior, on_plane);

        tracing::debug!(
            blocks = mesh.blocks().len(),
            points = mesh.points().len(),
            wake_steps,
            "generated wing section ring"
        );
        Ok(())
    }

    /// Fan of collapsed blocks closing the trailing sector of the rim.
    ///
    /// The surface edge of every fan block degenerates onto the trailing
    /// edge (corners 0/1 and 4/5 coincide), producing wedges that sweep the
    /// remaining quarter turn on each side.
    fn trailing_fan(&self, mesh: &mut BlockMesh, interior: bool, on_plane: bool) {
        let n = self.root.len();
        let radius = self.params.radius;
        let steps = n / 8;
        let te_root = *self.root.point(0);
        let te_tip = *self.tip.point(0);

        for i in 0..steps {
            let a_i = fan_angle(i + 1, steps);
            let a_j = fan_angle(i, steps);

            let mut upper = [
                te_root,
                te_root,
                rim_point(radius, a_i, te_root.z),
                rim_point(radius, a_j, te_root.z),
                te_tip,
                te_tip,
                rim_point(radius, a_i, te_tip.z),
                rim_point(radius, a_j, te_tip.z),
            ];
            let mut lower = [
                te_tip,
                te_tip,
                rim_point_mirror(radius, a_i, te_tip.z),
                rim_point_mirror(radius, a_j, te_tip.z),
                te_root,
                te_root,
                rim_point_mirror(radius, a_i, te_root.z),
                rim_point_mirror(radius, a_j, te_root.z),
            ];
            offset_rim(&mut upper, &mut lower, interior);

            mesh.add_block(upper, self.params.resolution, self.params.grading);
            mesh.add_block(lower, self.params.resolution, self.params.grading);

            mesh.add_face(
                FREESTREAM,
                [upper[2], upper[3], upper[6], upper[7]],
                PatchKind::Patch,
            );
            mesh.add_face(
                FREESTREAM,
                [lower[2], lower[3], lower[6], lower[7]],
                PatchKind::Patch,
            );
            if on_plane {
                mesh.add_face(
                    LEFT,
                    [upper[3], upper[2], upper[1], upper[0]],
                    PatchKind::Symmetry,
                );
                mesh.add_face(
                    LEFT,
                    [lower[4], lower[5], lower[6], lower[7]],
                    PatchKind::Symmetry,
                );
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.root.len() != self.tip.len() {
            return Err(SectionError::PointCountMismatch {
                left: self.root.len(),
                right: self.tip.len(),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.cut_fraction) {
            return Err(GenerateError::ParameterOutOfRange {
                parameter: "cut_fraction",
                value: self.cut_fraction,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if self.params.radius <= 0.0 {
            return Err(GenerateError::Degenerate("rim radius must be positive".into()).into());
        }
        Ok(())
    }
}

/// Number of upper-surface points lying aft of the chord station
/// `cut_fraction`, which is the number of ring steps belonging to the
/// trailing-edge wake closure.
///
/// A fraction of 0 puts the whole upper surface in the wake test; 1 puts
/// the cut at the trailing edge, so no step qualifies. Increasing the
/// fraction never increases the count.
#[must_use]
pub fn wake_point_count(section: &Section, cut_fraction: f64) -> usize {
    let d_cut = section.chord_station(cut_fraction);
    (0..section.len() / 2)
        .filter(|&i| section.point(i).x > d_cut)
        .count()
}

/// Applies the spanwise rim offset.
///
/// Interior rings lift all rim corners; the ring on the symmetry plane
/// lifts only the outboard ones so its inboard rim stays on the plane.
fn offset_rim(upper: &mut [Point3; 8], lower: &mut [Point3; 8], interior: bool) {
    if interior {
        for k in [2, 3, 6, 7] {
            upper[k].z += RIM_SPAN_OFFSET;
            lower[k].z += RIM_SPAN_OFFSET;
        }
    } else {
        upper[6].z += RIM_SPAN_OFFSET;
        upper[7].z += RIM_SPAN_OFFSET;
        lower[2].z += RIM_SPAN_OFFSET;
        lower[3].z += RIM_SPAN_OFFSET;
    }
}
