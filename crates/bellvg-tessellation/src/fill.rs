// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/fill.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

use bellvg_core::color::{PackedSrgb, RGB8, RGBA8};

/// The style used to fill a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    /// The solid color of the fill.
    ///
    /// By default, it is set to [`PackedSrgb::BLACK`].
    pub color: PackedSrgb,

    /// The fill rule defines how to determine what is inside and what is
    /// outside of a shape.
    ///
    /// See the [SVG specification][1] for more details.
    ///
    /// By default, it is set to `NonZero`.
    ///
    /// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
    pub rule: FillRule,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            color: PackedSrgb::BLACK,
            rule: FillRule::NonZero,
        }
    }
}

impl From<PackedSrgb> for Fill {
    fn from(color: PackedSrgb) -> Fill {
        Fill {
            color,
            ..Fill::default()
        }
    }
}

impl From<RGB8> for Fill {
    fn from(color: RGB8) -> Fill {
        Fill {
            color: color.into(),
            ..Fill::default()
        }
    }
}

impl From<RGBA8> for Fill {
    fn from(color: RGBA8) -> Fill {
        Fill {
            color: color.into(),
            ..Fill::default()
        }
    }
}

/// The fill rule defines how to determine what is inside and what is outside of
/// a shape.
///
/// See the [SVG specification][1].
///
/// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}
