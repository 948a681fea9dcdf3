use bellvg_core::math::Point;

use lyon::path::builder::SvgPathBuilder;

/// A single canvas-style path operation.
///
/// A recorded command list is the retained form of a path: it can be
/// replayed into the tessellator any number of times, so a path filled
/// once can still be stroked afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    BezierTo {
        control_a: Point,
        control_b: Point,
        to: Point,
    },
    Close,
}

/// Replays a recorded command list into a lyon path.
pub(crate) fn build_lyon_path(commands: &[PathCommand]) -> lyon::path::Path {
    let mut builder = lyon::path::Path::builder().with_svg();

    for command in commands {
        match *command {
            PathCommand::MoveTo(point) => {
                builder.move_to(lyon::math::Point::new(point.x, point.y));
            }
            PathCommand::LineTo(point) => {
                builder.line_to(lyon::math::Point::new(point.x, point.y));
            }
            PathCommand::BezierTo {
                control_a,
                control_b,
                to,
            } => {
                builder.cubic_bezier_to(
                    lyon::math::Point::new(control_a.x, control_a.y),
                    lyon::math::Point::new(control_b.x, control_b.y),
                    lyon::math::Point::new(to.x, to.y),
                );
            }
            PathCommand::Close => {
                builder.close();
            }
        }
    }

    builder.build()
}
