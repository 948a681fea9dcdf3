//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.

pub use rgb::*;

/// The color black with full opacity
pub const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
/// The color white with full opacity
pub const WHITE: RGBA8 = RGBA8 {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// A color packed as 4 floats representing RGBA channels.
///
/// Note that the color is assumed to be in SRGB format.
#[repr(C)]
#[derive(Default, Debug, Clone, Copy, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct PackedSrgb(pub [f32; 4]);

impl PackedSrgb {
    /// The color black with full opacity
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// The color white with full opacity
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    /// A color with no opacity
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    /// Creates a [`PackedSrgb`] from its SRGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    pub fn b(&self) -> f32 {
        self.0[2]
    }
    pub fn a(&self) -> f32 {
        self.0[3]
    }
}

impl From<RGB8> for PackedSrgb {
    fn from(color: RGB8) -> Self {
        Self([
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            1.0,
        ])
    }
}

impl From<RGBA8> for PackedSrgb {
    fn from(color: RGBA8) -> Self {
        Self([
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
            f32::from(color.a) / 255.0,
        ])
    }
}

impl From<PackedSrgb> for [f32; 4] {
    fn from(color: PackedSrgb) -> Self {
        color.0
    }
}
