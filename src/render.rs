use bellvg_core::bezier::CubicBezier;
use bellvg_core::math::point;
use bellvg_core::surface::Surface;

use crate::error::RenderError;
use crate::shape::CurveShape;
use crate::style::CurveStyle;

/// Renders the filled, progressively shaded curve onto `surface`.
///
/// `percent` is the completion fraction in `[0.0, 1.0]`. Every call is
/// self-contained: the background and outline are drawn from scratch and
/// the completed region is filled on top, so callers animate by re-invoking
/// with a new `percent` each frame.
///
/// The completed region grows monotonically with `percent`: from `end`
/// toward `vertex` over the first half, then from `vertex` toward `begin`
/// over the second, covering the whole area under the curve at
/// `percent = 1.0`.
///
/// # Errors
///
/// Returns a [`RenderError`] when `percent` is not a finite value in
/// `[0.0, 1.0]` or the shape contains a non-finite coordinate. Nothing is
/// drawn on error.
pub fn render<S: Surface>(
    surface: &mut S,
    percent: f32,
    shape: &CurveShape,
    style: &CurveStyle,
) -> Result<(), RenderError> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(RenderError::InvalidPercent(percent));
    }
    shape.validate()?;

    let left = shape.left_lobe();
    let right = shape.right_lobe();
    let mid_y = shape.baseline_mid_y();

    // Background and outline.
    surface.begin_path();
    surface.move_to(shape.begin);
    surface.bezier_curve_to(left.ctrl1, left.ctrl2, left.to);
    surface.bezier_curve_to(right.ctrl1, right.ctrl2, right.to);
    surface.set_fill_color(style.background_color);
    surface.fill();
    surface.set_stroke_color(style.line_color);
    surface.set_stroke_width(style.line_width);
    surface.stroke();

    // Completed overlay. The right lobe fills first, from `end` toward the
    // vertex; once `remaining` drops to the half covered by the right lobe
    // alone, the left lobe starts filling from the vertex toward `begin`
    // and `remaining` is folded back so the right pass covers its whole
    // half.
    surface.set_fill_color(style.completed_color);

    let mut remaining = 1.0 - percent;

    if remaining <= 0.5 {
        let from = remaining * 2.0;
        let step = lobe_step(&left, from, style.min_samples);
        fill_under_lobe(surface, &left, from, step, mid_y);
        remaining = 0.5;
    }

    let from = (remaining - 0.5) * 2.0;
    let step = lobe_step(&right, from, style.min_samples);
    fill_under_lobe(surface, &right, from, step, mid_y);

    Ok(())
}

/// The flattening step for walking a lobe from the parameter `from` up to
/// `1`: at least `min_samples` points over the span, denser when the walked
/// portion of the lobe covers more distance.
fn lobe_step(lobe: &CubicBezier, from: f32, min_samples: u32) -> f32 {
    let dx = (lobe.to.x - lobe.from.x).abs() * from;
    let dy = (lobe.to.y - lobe.from.y).abs() * from;

    dx.min(dy).max(min_samples as f32).recip()
}

/// Fills the area under `lobe` between the curve points at `from` and
/// `t = 1`, closed down to the baseline midline.
///
/// The polygon runs along the flattened curve to the lobe endpoint, drops
/// to the midline, and returns along it to below the start point. At
/// `from >= 1` the polygon degenerates to zero area; the fill is issued
/// all the same.
fn fill_under_lobe<S: Surface>(
    surface: &mut S,
    lobe: &CubicBezier,
    from: f32,
    step: f32,
    mid_y: f32,
) {
    let start = lobe.point_at(from);

    log::trace!("lobe fill over t in [{from}, 1] with step {step}");

    surface.begin_path();
    surface.move_to(start);
    for p in lobe.flatten_from(from, step).skip(1) {
        surface.line_to(p);
    }
    surface.line_to(lobe.to);
    surface.line_to(point(lobe.to.x, mid_y));
    surface.line_to(point(start.x, mid_y));
    surface.fill();
}
