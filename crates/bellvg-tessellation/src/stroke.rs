use bellvg_core::color::{PackedSrgb, RGB8};

/// The style of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// The color of the stroke.
    pub color: PackedSrgb,

    /// The stroke width in logical points.
    pub width: f32,

    /// The shape used at the ends of open subpaths.
    pub line_cap: LineCap,

    /// The shape used at corners between segments.
    pub line_join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: PackedSrgb::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

impl From<RGB8> for Stroke {
    fn from(color: RGB8) -> Stroke {
        Stroke {
            color: color.into(),
            ..Stroke::default()
        }
    }
}

/// The shape used at the ends of open subpaths when they are stroked.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}

/// The shape used at the corner of a path when it is stroked.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}
