//! Atlas Tiles
//!
//! Prints which atlas tile every face of a block samples, and dumps the
//! composed block shader's face chain.
//!
//! Run with: cargo run -p voxatlas_rendering --example atlas_tiles

use glam::Vec3;
use voxatlas_rendering::shaders::face_branches;
use voxatlas_rendering::shading::{atlas_coord, FaceOrientation};
use voxatlas_rendering::RenderConfig;

fn main() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║                  VOXATLAS - ATLAS TILES                    ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let config = RenderConfig::default();
    println!("Sampler: {:?}", config.sampler);
    println!("Texture array: {} layers", config.textures.count);
    println!();

    let sample_point = Vec3::new(0.5, 0.5, 0.5);
    println!("Sample position {sample_point:?}:");
    for face in FaceOrientation::PRIORITY {
        let coord = atlas_coord(face, sample_point);
        let uv = coord.uv();
        // Tiles are a 4x3 grid
        let col = (uv.x * 4.0).floor();
        let row = (uv.y * 3.0).floor();
        println!(
            "  {:<5} offset ({:.5}, {:.5})  uv ({:.5}, {:.5})  tile [{col}, {row}]",
            format!("{face:?}"),
            coord.offset.x,
            coord.offset.y,
            uv.x,
            uv.y,
        );
    }
    println!();

    println!("Generated WGSL face chain:");
    println!("{}", face_branches());
}
