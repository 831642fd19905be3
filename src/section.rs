//! Aerofoil cross-sections positioned in 3D space.

use crate::error::{Result, SectionError};
use crate::math::{Point2, Point3};

/// A closed aerofoil outline placed at a constant span coordinate.
///
/// Points run from the trailing edge along the upper surface to the leading
/// edge and back along the lower surface, the loop order produced by
/// standard aerofoil coordinate files. Spanwise generators pair point `i`
/// with its mirror `len - 1 - i`, and the chord is measured between the
/// trailing-edge point (index 0) and the reference point just past the
/// mirror midpoint (index `len / 2 + 1`).
#[derive(Debug, Clone)]
pub struct Section {
    points: Vec<Point3>,
}

impl Section {
    /// Creates a section from an ordered loop of points.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::TooFewPoints`] if fewer than four points are
    /// supplied; the chord reference index `len / 2 + 1` must exist.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 4 {
            return Err(SectionError::TooFewPoints {
                found: points.len(),
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Builds a section from a normalized 2D profile.
    ///
    /// Each profile point is scaled by `scale`, shifted by the x/y of
    /// `position` and placed at the constant span coordinate `position.z`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::TooFewPoints`] if the profile has fewer than
    /// four points.
    pub fn from_profile(profile: &[Point2], position: Point3, scale: f64) -> Result<Self> {
        let points = profile
            .iter()
            .map(|p| {
                Point3::new(
                    p.x * scale + position.x,
                    p.y * scale + position.y,
                    position.z,
                )
            })
            .collect();
        Self::new(points)
    }

    /// Returns the section points in loop order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the point at loop index `i`.
    #[must_use]
    pub fn point(&self, i: usize) -> &Point3 {
        &self.points[i]
    }

    /// Number of points in the loop.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; sections carry at least four points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Chord extent of the section: trailing-edge x minus the x of the
    /// reference point on the leading-edge side.
    ///
    /// Outlines that run in the negative x direction yield a negative
    /// chord; [`Self::chord_station`] works either way.
    #[must_use]
    pub fn chord(&self) -> f64 {
        self.points[0].x - self.leading_ref().x
    }

    /// Absolute x of the chord station `fraction` of the way from the
    /// leading edge toward the trailing edge.
    #[must_use]
    pub fn chord_station(&self, fraction: f64) -> f64 {
        self.leading_ref().x + fraction * self.chord()
    }

    /// Linear interpolation between two sections of equal point count.
    ///
    /// `t = 0` reproduces `self`, `t = 1` reproduces `other`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::PointCountMismatch`] if the point counts
    /// differ.
    pub fn lerp(&self, other: &Section, t: f64) -> Result<Section> {
        self.check_matching(other)?;
        let points = self
            .points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| a + (b - a) * t)
            .collect();
        Ok(Self { points })
    }

    /// Blends this section toward `other` over an aft chordwise band.
    ///
    /// Points forward of chord station `start` are kept as-is; behind it
    /// the blend weight ramps linearly, reaching full `other` at station
    /// `end`. Stations are fractions of this section's chord, measured from
    /// the leading edge.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::PointCountMismatch`] if the point counts
    /// differ.
    pub fn blend_aft(&self, other: &Section, start: f64, end: f64) -> Result<Section> {
        self.check_matching(other)?;
        let d_start = self.chord_station(start);
        let d_end = self.chord_station(end);
        let points = self
            .points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| {
                let weight = if a.x > d_start {
                    (a.x - d_start) / (d_end - d_start)
                } else {
                    0.0
                };
                a + (b - a) * weight
            })
            .collect();
        Ok(Self { points })
    }

    /// Reference point on the leading-edge side of the chord.
    fn leading_ref(&self) -> &Point3 {
        &self.points[self.points.len() / 2 + 1]
    }

    fn check_matching(&self, other: &Section) -> Result<()> {
        if self.len() != other.len() {
            return Err(SectionError::PointCountMismatch {
                left: self.len(),
                right: other.len(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::{HexfoilError, SectionError};
    use crate::math::{Point2, Point3};

    use super::Section;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Diamond-shaped loop: trailing edge at x = 1, leading edge at x = 0.
    fn diamond(z: f64) -> Section {
        Section::new(vec![
            p(1.0, 0.0, z),
            p(0.5, 0.5, z),
            p(0.0, 0.0, z),
            p(0.5, -0.5, z),
        ])
        .unwrap()
    }

    // ─────────────────────────── Construction ──────────────────────────

    #[test]
    fn rejects_too_few_points() {
        let result = Section::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        assert!(matches!(
            result,
            Err(HexfoilError::Section(SectionError::TooFewPoints { found: 3 }))
        ));
    }

    #[test]
    fn from_profile_scales_and_positions() {
        let profile = vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.5),
        ];
        let section = Section::from_profile(&profile, p(10.0, 5.0, 3.0), 2.0).unwrap();

        assert_eq!(section.len(), 4);
        assert_relative_eq!(section.point(0).x, 12.0);
        assert_relative_eq!(section.point(0).y, 5.0);
        assert_relative_eq!(section.point(1).y, 6.0);
        for point in section.points() {
            assert_relative_eq!(point.z, 3.0);
        }
    }

    // ────────────────────────────── Chord ──────────────────────────────

    #[test]
    fn chord_runs_from_reference_to_trailing_edge() {
        let section = diamond(0.0);
        // Reference index is len / 2 + 1 = 3, the point at x = 0.5.
        assert_relative_eq!(section.chord(), 0.5);
        assert_relative_eq!(section.chord_station(0.0), 0.5);
        assert_relative_eq!(section.chord_station(1.0), 1.0);
        assert_relative_eq!(section.chord_station(0.5), 0.75);
    }

    #[test]
    fn chord_is_negative_for_reversed_outlines() {
        let section = Section::new(vec![
            p(-1.0, 0.0, 0.0),
            p(-0.5, 0.5, 0.0),
            p(0.0, 0.0, 0.0),
            p(-0.5, -0.5, 0.0),
        ])
        .unwrap();
        assert_relative_eq!(section.chord(), -0.5);
        // Stations still walk from the reference toward the trailing edge.
        assert_relative_eq!(section.chord_station(0.5), -0.75);
    }

    // ─────────────────────────── Interpolation ─────────────────────────

    #[test]
    fn lerp_endpoints_reproduce_inputs() {
        let a = diamond(0.0);
        let b = diamond(4.0);

        let at_a = a.lerp(&b, 0.0).unwrap();
        let at_b = a.lerp(&b, 1.0).unwrap();
        for i in 0..a.len() {
            assert_relative_eq!(at_a.point(i).z, 0.0);
            assert_relative_eq!(at_b.point(i).z, 4.0);
        }
    }

    #[test]
    fn lerp_midpoint_averages_coordinates() {
        let a = diamond(0.0);
        let b = Section::new(vec![
            p(2.0, 0.0, 2.0),
            p(1.0, 1.0, 2.0),
            p(0.0, 0.0, 2.0),
            p(1.0, -1.0, 2.0),
        ])
        .unwrap();

        let mid = a.lerp(&b, 0.5).unwrap();
        assert_relative_eq!(mid.point(0).x, 1.5);
        assert_relative_eq!(mid.point(1).y, 0.75);
        assert_relative_eq!(mid.point(0).z, 1.0);
    }

    #[test]
    fn lerp_rejects_mismatched_point_counts() {
        let a = diamond(0.0);
        let b = Section::new(vec![
            p(1.0, 0.0, 0.0),
            p(0.7, 0.3, 0.0),
            p(0.3, 0.4, 0.0),
            p(0.0, 0.0, 0.0),
            p(0.5, -0.5, 0.0),
        ])
        .unwrap();
        assert!(matches!(
            a.lerp(&b, 0.5),
            Err(HexfoilError::Section(
                SectionError::PointCountMismatch { left: 4, right: 5 }
            ))
        ));
    }

    // ──────────────────────────── Blending ─────────────────────────────

    #[test]
    fn blend_aft_keeps_points_forward_of_start() {
        let a = diamond(0.0);
        let mut shifted = Vec::new();
        for point in a.points() {
            shifted.push(p(point.x, point.y + 1.0, point.z));
        }
        let b = Section::new(shifted).unwrap();

        // Band from mid-chord (x = 0.75) to the trailing edge (x = 1.0).
        let blended = a.blend_aft(&b, 0.5, 1.0).unwrap();

        // Leading-edge point (x = 0) and mid points (x = 0.5) are untouched.
        assert_relative_eq!(blended.point(1).y, 0.5);
        assert_relative_eq!(blended.point(2).y, 0.0);
        assert_relative_eq!(blended.point(3).y, -0.5);
        // Trailing edge (x = 1.0) sits at the end of the ramp: full blend.
        assert_relative_eq!(blended.point(0).y, 1.0);
    }

    #[test]
    fn blend_aft_ramps_linearly_inside_band() {
        let a = Section::new(vec![
            p(1.0, 0.0, 0.0),
            p(0.75, 0.5, 0.0),
            p(0.0, 0.0, 0.0),
            p(0.5, -0.5, 0.0),
        ])
        .unwrap();
        let b = Section::new(vec![
            p(1.0, 0.0, 2.0),
            p(0.75, 0.5, 2.0),
            p(0.0, 0.0, 2.0),
            p(0.5, -0.5, 2.0),
        ])
        .unwrap();

        // Chord runs x = 0.5..1.0; band covers the full chord.
        let blended = a.blend_aft(&b, 0.0, 1.0).unwrap();
        // x = 0.75 lies halfway along the band.
        assert_relative_eq!(blended.point(1).z, 1.0);
        // x = 0.5 sits exactly at the band start: weight zero.
        assert_relative_eq!(blended.point(3).z, 0.0);
        assert_relative_eq!(blended.point(0).z, 2.0);
    }
}
