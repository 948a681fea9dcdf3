mod render;
mod shape;
mod style;

pub mod error;

pub use render::render;
pub use shape::CurveShape;
pub use style::{CurveStyle, BACKGROUND_COLOR, CURVE_COLOR};

pub use bellvg_core::*;

#[cfg(feature = "tessellation")]
pub use bellvg_tessellation as tessellation;
