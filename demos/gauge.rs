use bellvg::math::point;
use bellvg::tessellation::Tessellator;
use bellvg::{render, CurveShape, CurveStyle};

fn main() {
    env_logger::init();

    let shape = CurveShape::new(
        point(0.0, 100.0),
        point(100.0, 0.0),
        point(200.0, 100.0),
        [0.3, 0.0, 0.7, 0.0],
    );
    let style = CurveStyle::default();

    for percent in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let mut surface = Tessellator::new();
        render(&mut surface, percent, &shape, &style).expect("valid inputs");

        let mesh = surface.into_mesh();
        println!(
            "percent {percent:.2}: {} vertices, {} triangles",
            mesh.buffers.vertices.len(),
            mesh.buffers.indices.len() / 3,
        );
    }
}
