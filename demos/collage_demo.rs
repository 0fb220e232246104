//! Demonstration of collage planning, composition, and export

use image::{Rgba, RgbaImage};
use journease::collage::{
    build_collage, plan, CollageLayout, DecodeJoin, ImageDimensions,
};

fn tile(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

fn main() {
    println!("=== Journease Collage Demo ===\n");

    let photos = vec![
        tile(320, 240, [220, 90, 70, 255]),
        tile(240, 320, [80, 160, 220, 255]),
        tile(280, 280, [120, 200, 120, 255]),
        tile(200, 150, [240, 200, 90, 255]),
        tile(260, 200, [170, 120, 210, 255]),
    ];

    for layout in [CollageLayout::Row, CollageLayout::Column, CollageLayout::Grid] {
        demonstrate_layout(layout, &photos);
    }

    demonstrate_out_of_order_join();
}

fn demonstrate_layout(layout: CollageLayout, photos: &[RgbaImage]) {
    let dims: Vec<ImageDimensions> = photos
        .iter()
        .map(|p| ImageDimensions::new(p.width(), p.height()))
        .collect();
    let collage_plan = plan(layout, &dims);

    println!(
        "{:?} layout: {}x{} canvas",
        layout, collage_plan.canvas_width, collage_plan.canvas_height
    );
    for placement in &collage_plan.placements {
        println!(
            "  photo {} at ({}, {}) size {}x{}",
            placement.index, placement.x, placement.y, placement.width, placement.height
        );
    }

    let png = build_collage(layout, photos).expect("collage builds");
    println!("  exported {} PNG bytes\n", png.len());
}

fn demonstrate_out_of_order_join() {
    println!("Decode join: completions arrive out of order");

    let mut join = DecodeJoin::new(3);
    join.resolve(2, Ok(tile(64, 64, [0, 0, 0, 255]))).unwrap();
    join.resolve(0, Ok(tile(32, 32, [255, 255, 255, 255]))).unwrap();
    join.resolve(1, Err("simulated decode failure".to_string())).unwrap();

    let outcome = join.finish().expect("all slots resolved");
    println!(
        "  {} image(s) survived, {} dropped",
        outcome.images.len(),
        outcome.dropped.len()
    );
    for (index, reason) in &outcome.dropped {
        println!("  photo {} dropped: {}", index, reason);
    }
    // Survivors keep the selection order regardless of completion order
    let sizes: Vec<u32> = outcome.images.iter().map(|i| i.width()).collect();
    println!("  surviving widths in selection order: {:?}", sizes);
}
