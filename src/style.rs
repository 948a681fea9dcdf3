use bellvg_core::color::RGB8;

/// The default fill color of the not-yet-completed region.
pub const BACKGROUND_COLOR: RGB8 = RGB8 {
    r: 250,
    g: 241,
    b: 224,
};

/// The default color of the curve outline and of the completed region.
pub const CURVE_COLOR: RGB8 = RGB8 {
    r: 140,
    g: 120,
    b: 83,
};

/// The colors and sampling options of a rendered curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// The fill color of the area under the curve that is not yet completed.
    ///
    /// Defaults to [`BACKGROUND_COLOR`].
    pub background_color: RGB8,

    /// The stroke color of the curve outline.
    ///
    /// Defaults to [`CURVE_COLOR`].
    pub line_color: RGB8,

    /// The fill color of the completed region.
    ///
    /// Defaults to [`CURVE_COLOR`].
    pub completed_color: RGB8,

    /// The outline stroke width in logical points.
    ///
    /// Defaults to `2.0`.
    pub line_width: f32,

    /// The minimum number of samples used when flattening a lobe into a
    /// fill polygon. Lobes spanning more pixels than this sample denser.
    ///
    /// Lowering it trades fill fidelity for fewer surface operations.
    ///
    /// Defaults to `1000`.
    pub min_samples: u32,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveStyle {
    pub const fn new() -> Self {
        Self {
            background_color: BACKGROUND_COLOR,
            line_color: CURVE_COLOR,
            completed_color: CURVE_COLOR,
            line_width: 2.0,
            min_samples: 1000,
        }
    }

    /// The fill color of the area under the curve that is not yet completed.
    pub const fn background_color(mut self, color: RGB8) -> Self {
        self.background_color = color;
        self
    }

    /// The stroke color of the curve outline.
    pub const fn line_color(mut self, color: RGB8) -> Self {
        self.line_color = color;
        self
    }

    /// The fill color of the completed region.
    pub const fn completed_color(mut self, color: RGB8) -> Self {
        self.completed_color = color;
        self
    }

    /// The outline stroke width in logical points.
    pub const fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// The minimum number of samples used when flattening a lobe.
    pub const fn min_samples(mut self, samples: u32) -> Self {
        self.min_samples = samples;
        self
    }
}
