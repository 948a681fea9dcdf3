use crate::color::RGB8;
use crate::math::Point;

/// A 2D drawing target accepting canvas-style path operations.
///
/// A path is built up from `move_to`/`line_to`/`bezier_curve_to` segments
/// after a `begin_path`, then painted with `fill` and/or `stroke`.
/// Implementations decide what painting means: tessellating into a triangle
/// mesh, recording commands, forwarding to a windowing canvas.
///
/// Drawing mutates the surface's path and paint state, so a surface must
/// not be drawn to from two places at once; callers hold exclusive access
/// to it for the duration of a render call.
pub trait Surface {
    /// Discards the current path and starts a new, empty one.
    fn begin_path(&mut self);

    /// Moves the current point to `point` without drawing.
    fn move_to(&mut self, point: Point);

    /// Adds a straight segment from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Adds a cubic Bezier segment from the current point to `to`, given
    /// its two control points.
    fn bezier_curve_to(&mut self, control_a: Point, control_b: Point, to: Point);

    /// Sets the color used by [`fill`](Surface::fill).
    fn set_fill_color(&mut self, color: RGB8);

    /// Sets the color used by [`stroke`](Surface::stroke).
    fn set_stroke_color(&mut self, color: RGB8);

    /// Sets the line width used by [`stroke`](Surface::stroke).
    fn set_stroke_width(&mut self, width: f32);

    /// Fills the current path with the fill color, treating open subpaths
    /// as implicitly closed, using the nonzero winding rule.
    ///
    /// The current path is left in place, so the same path can be stroked
    /// afterwards.
    fn fill(&mut self);

    /// Strokes the outline of the current path with the stroke color and
    /// width.
    fn stroke(&mut self);
}
