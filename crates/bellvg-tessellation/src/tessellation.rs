// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/wgpu/src/geometry.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

use lyon::tessellation;

use bellvg_core::color::{PackedSrgb, RGB8};
use bellvg_core::math::Point;
use bellvg_core::surface::Surface;

use crate::fill::{Fill, FillRule};
use crate::mesh::{Indexed, SolidMesh, SolidVertex2D};
use crate::path::{build_lyon_path, PathCommand};
use crate::stroke::{LineCap, LineJoin, Stroke};

/// A [`Surface`] that tessellates everything drawn to it into a single
/// indexed triangle mesh.
///
/// Path commands are recorded as they are issued; each
/// [`fill`](Surface::fill) or [`stroke`](Surface::stroke) tessellates the
/// current path and appends the triangles to the mesh.
/// [`begin_path`](Surface::begin_path) is the only operation that discards
/// the recorded path, so a path can be filled and then stroked.
#[allow(missing_debug_implementations)]
pub struct Tessellator {
    commands: Vec<PathCommand>,
    fill: Fill,
    stroke: Stroke,
    buffers: tessellation::VertexBuffers<SolidVertex2D, u32>,
    fill_tessellator: tessellation::FillTessellator,
    stroke_tessellator: tessellation::StrokeTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            fill: Fill::default(),
            stroke: Stroke::default(),
            buffers: tessellation::VertexBuffers::new(),
            fill_tessellator: tessellation::FillTessellator::new(),
            stroke_tessellator: tessellation::StrokeTessellator::new(),
        }
    }
}

impl Tessellator {
    /// Creates a new empty [`Tessellator`].
    ///
    /// The coordinate system has its origin at the top-left corner, matching
    /// the surface coordinates drawn by callers.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands of the current path, in the order they were issued.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consumes the tessellator and returns the accumulated mesh.
    pub fn into_mesh(self) -> SolidMesh {
        log::debug!(
            "tessellated mesh: {} vertices, {} triangles",
            self.buffers.vertices.len(),
            self.buffers.indices.len() / 3
        );

        SolidMesh {
            buffers: Indexed {
                vertices: self.buffers.vertices,
                indices: self.buffers.indices,
            },
        }
    }
}

impl Surface for Tessellator {
    fn begin_path(&mut self) {
        self.commands.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    fn bezier_curve_to(&mut self, control_a: Point, control_b: Point, to: Point) {
        self.commands.push(PathCommand::BezierTo {
            control_a,
            control_b,
            to,
        });
    }

    fn set_fill_color(&mut self, color: RGB8) {
        self.fill.color = color.into();
    }

    fn set_stroke_color(&mut self, color: RGB8) {
        self.stroke.color = color.into();
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn fill(&mut self) {
        let path = build_lyon_path(&self.commands);

        let options =
            tessellation::FillOptions::default().with_fill_rule(into_fill_rule(self.fill.rule));

        self.fill_tessellator
            .tessellate_path(
                &path,
                &options,
                &mut tessellation::BuffersBuilder::new(
                    &mut self.buffers,
                    TriangleVertex2DBuilder(self.fill.color),
                ),
            )
            .expect("Tessellate path.");
    }

    fn stroke(&mut self) {
        let path = build_lyon_path(&self.commands);

        let mut options = tessellation::StrokeOptions::default();
        options.line_width = self.stroke.width;
        options.start_cap = into_line_cap(self.stroke.line_cap);
        options.end_cap = into_line_cap(self.stroke.line_cap);
        options.line_join = into_line_join(self.stroke.line_join);

        self.stroke_tessellator
            .tessellate_path(
                &path,
                &options,
                &mut tessellation::BuffersBuilder::new(
                    &mut self.buffers,
                    TriangleVertex2DBuilder(self.stroke.color),
                ),
            )
            .expect("Stroke path");
    }
}

struct TriangleVertex2DBuilder(PackedSrgb);

impl tessellation::FillVertexConstructor<SolidVertex2D> for TriangleVertex2DBuilder {
    fn new_vertex(&mut self, vertex: tessellation::FillVertex<'_>) -> SolidVertex2D {
        let position = vertex.position();

        SolidVertex2D {
            position: [position.x, position.y],
            color: self.0,
        }
    }
}

impl tessellation::StrokeVertexConstructor<SolidVertex2D> for TriangleVertex2DBuilder {
    fn new_vertex(&mut self, vertex: tessellation::StrokeVertex<'_, '_>) -> SolidVertex2D {
        let position = vertex.position();

        SolidVertex2D {
            position: [position.x, position.y],
            color: self.0,
        }
    }
}

fn into_fill_rule(rule: FillRule) -> lyon::tessellation::FillRule {
    match rule {
        FillRule::NonZero => lyon::tessellation::FillRule::NonZero,
        FillRule::EvenOdd => lyon::tessellation::FillRule::EvenOdd,
    }
}

fn into_line_cap(line_cap: LineCap) -> lyon::tessellation::LineCap {
    match line_cap {
        LineCap::Butt => lyon::tessellation::LineCap::Butt,
        LineCap::Square => lyon::tessellation::LineCap::Square,
        LineCap::Round => lyon::tessellation::LineCap::Round,
    }
}

fn into_line_join(line_join: LineJoin) -> lyon::tessellation::LineJoin {
    match line_join {
        LineJoin::Miter => lyon::tessellation::LineJoin::Miter,
        LineJoin::Round => lyon::tessellation::LineJoin::Round,
        LineJoin::Bevel => lyon::tessellation::LineJoin::Bevel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bellvg_core::math::point;

    fn unit_square(surface: &mut Tessellator) {
        surface.begin_path();
        surface.move_to(point(0.0, 0.0));
        surface.line_to(point(1.0, 0.0));
        surface.line_to(point(1.0, 1.0));
        surface.line_to(point(0.0, 1.0));
    }

    #[test]
    fn fill_produces_triangles() {
        let color = RGB8 {
            r: 10,
            g: 20,
            b: 30,
        };

        let mut surface = Tessellator::new();
        surface.set_fill_color(color);
        unit_square(&mut surface);
        surface.fill();

        let mesh = surface.into_mesh();
        assert!(mesh.buffers.indices.len() >= 6);
        assert_eq!(mesh.buffers.indices.len() % 3, 0);

        let expected = PackedSrgb::from(color);
        assert!(mesh.buffers.vertices.iter().all(|v| v.color == expected));
    }

    #[test]
    fn path_survives_fill_for_stroke() {
        let mut surface = Tessellator::new();
        unit_square(&mut surface);
        surface.fill();

        let after_fill = surface.buffers.vertices.len();
        assert!(after_fill > 0);

        surface.set_stroke_width(0.1);
        surface.stroke();
        assert!(surface.buffers.vertices.len() > after_fill);
        assert_eq!(surface.commands().len(), 4);
    }

    #[test]
    fn begin_path_discards_the_recorded_path() {
        let mut surface = Tessellator::new();
        unit_square(&mut surface);
        surface.begin_path();
        assert!(surface.commands().is_empty());

        surface.fill();
        let mesh = surface.into_mesh();
        assert!(mesh.buffers.vertices.is_empty());
    }

    #[test]
    fn bezier_commands_are_tessellated() {
        let mut surface = Tessellator::new();
        surface.begin_path();
        surface.move_to(point(0.0, 0.0));
        surface.bezier_curve_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0));
        surface.fill();

        let mesh = surface.into_mesh();
        assert!(!mesh.buffers.vertices.is_empty());
    }
}
