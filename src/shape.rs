use bellvg_core::bezier::CubicBezier;
use bellvg_core::math::{point, Point};

use crate::error::RenderError;

/// The geometry of the two-lobe curve.
///
/// `begin` and `end` are the baseline endpoints and are expected to share a
/// y coordinate; `vertex` is the peak joining the lobes. The shape of each
/// lobe is controlled by `control_fractions`: fractions of `vertex.x` that
/// place the control-point x offsets, mirrored about `vertex.x` for the
/// right lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveShape {
    /// The left baseline endpoint.
    pub begin: Point,
    /// The peak joining the two lobes.
    pub vertex: Point,
    /// The right baseline endpoint.
    pub end: Point,
    /// Fractions of `vertex.x` used to derive the control-point x offsets.
    ///
    /// Only entries `0` and `2` are read; the four-entry layout is kept for
    /// callers that already hold the full tuple.
    pub control_fractions: [f32; 4],
}

impl CurveShape {
    pub const fn new(
        begin: Point,
        vertex: Point,
        end: Point,
        control_fractions: [f32; 4],
    ) -> Self {
        Self {
            begin,
            vertex,
            end,
            control_fractions,
        }
    }

    /// The y coordinate of the baseline midline, the lower closing edge of
    /// every fill polygon.
    pub fn baseline_mid_y(&self) -> f32 {
        (self.begin.y + self.end.y) / 2.0
    }

    /// The left lobe, from `begin` up to `vertex`.
    pub fn left_lobe(&self) -> CubicBezier {
        CubicBezier::new(
            self.begin,
            point(
                self.vertex.x * self.control_fractions[0],
                self.baseline_mid_y(),
            ),
            point(self.vertex.x * self.control_fractions[2], self.vertex.y),
            self.vertex,
        )
    }

    /// The right lobe, from `vertex` down to `end`, with control points
    /// mirrored about `vertex.x`.
    pub fn right_lobe(&self) -> CubicBezier {
        CubicBezier::new(
            self.vertex,
            point(
                self.vertex.x + self.vertex.x * (1.0 - self.control_fractions[2]),
                self.vertex.y,
            ),
            point(
                self.vertex.x + self.vertex.x * (1.0 - self.control_fractions[0]),
                self.baseline_mid_y(),
            ),
            self.end,
        )
    }

    /// Checks that every coordinate read during a render is finite.
    ///
    /// Non-finite geometry would otherwise draw a degenerate or invisible
    /// shape with no diagnosable failure.
    pub fn validate(&self) -> Result<(), RenderError> {
        fn finite(p: Point) -> bool {
            p.x.is_finite() && p.y.is_finite()
        }

        if !finite(self.begin) {
            return Err(RenderError::NonFinitePoint("begin"));
        }
        if !finite(self.vertex) {
            return Err(RenderError::NonFinitePoint("vertex"));
        }
        if !finite(self.end) {
            return Err(RenderError::NonFinitePoint("end"));
        }

        for index in [0, 2] {
            if !self.control_fractions[index].is_finite() {
                return Err(RenderError::NonFiniteFraction(index));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shape() -> CurveShape {
        CurveShape::new(
            point(0.0, 100.0),
            point(100.0, 0.0),
            point(200.0, 100.0),
            [0.3, 0.0, 0.7, 0.0],
        )
    }

    #[test]
    fn left_lobe_control_points() {
        let lobe = shape().left_lobe();

        assert_eq!(lobe.from, point(0.0, 100.0));
        assert_relative_eq!(lobe.ctrl1.x, 30.0);
        assert_relative_eq!(lobe.ctrl1.y, 100.0);
        assert_relative_eq!(lobe.ctrl2.x, 70.0);
        assert_relative_eq!(lobe.ctrl2.y, 0.0);
        assert_eq!(lobe.to, point(100.0, 0.0));
    }

    #[test]
    fn right_lobe_mirrors_the_left() {
        let shape = shape();
        let left = shape.left_lobe();
        let right = shape.right_lobe();

        assert_eq!(right.from, shape.vertex);
        assert_eq!(right.to, shape.end);

        // ctrl1 mirrors the left lobe's ctrl2, ctrl2 mirrors ctrl1.
        assert_relative_eq!(right.ctrl1.x, 2.0 * shape.vertex.x - left.ctrl2.x);
        assert_relative_eq!(right.ctrl1.y, left.ctrl2.y);
        assert_relative_eq!(right.ctrl2.x, 2.0 * shape.vertex.x - left.ctrl1.x);
        assert_relative_eq!(right.ctrl2.y, left.ctrl1.y);
    }

    #[test]
    fn baseline_midline_averages_the_endpoints() {
        let mut uneven = shape();
        uneven.end.y = 120.0;
        assert_relative_eq!(uneven.baseline_mid_y(), 110.0);
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        let mut bad = shape();
        bad.vertex.y = f32::NAN;
        assert_eq!(bad.validate(), Err(RenderError::NonFinitePoint("vertex")));
    }

    #[test]
    fn validate_rejects_non_finite_fractions() {
        let mut bad = shape();
        bad.control_fractions[2] = f32::INFINITY;
        assert_eq!(bad.validate(), Err(RenderError::NonFiniteFraction(2)));
    }

    #[test]
    fn validate_ignores_unread_fractions() {
        let mut odd = shape();
        odd.control_fractions[1] = f32::NAN;
        odd.control_fractions[3] = f32::NAN;
        assert_eq!(odd.validate(), Ok(()));
    }
}
