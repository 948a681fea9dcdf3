mod fill;
mod mesh;
mod path;
mod stroke;
mod tessellation;

pub use fill::{Fill, FillRule};
pub use mesh::{Indexed, SolidMesh, SolidVertex2D};
pub use path::PathCommand;
pub use stroke::{LineCap, LineJoin, Stroke};
pub use tessellation::Tessellator;
