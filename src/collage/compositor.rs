//! Collage composition and export
//!
//! Flattens a planned layout onto a single RGBA canvas and encodes the
//! result losslessly. Input images are borrowed and never mutated; the same
//! selection, layout, and pixel data always produce byte-identical output.

use crate::collage::error::{CollageError, CollageResult};
use crate::collage::layout::{plan, CollageLayout, CollagePlan, ImageDimensions};
use image::codecs::png::PngEncoder;
use image::{imageops, ImageEncoder, RgbaImage};

/// Plan placements for a set of decoded images
pub fn plan_for_images(layout: CollageLayout, images: &[RgbaImage]) -> CollagePlan {
    let dims: Vec<ImageDimensions> = images
        .iter()
        .map(|img| ImageDimensions::new(img.width(), img.height()))
        .collect();
    plan(layout, &dims)
}

/// Flatten the selection onto one canvas according to the layout.
///
/// Unpainted canvas area (uneven strips, blank trailing grid cells) stays
/// transparent.
pub fn compose(layout: CollageLayout, images: &[RgbaImage]) -> CollageResult<RgbaImage> {
    if images.is_empty() {
        return Err(CollageError::EmptySelection);
    }

    let plan = plan_for_images(layout, images);
    let mut canvas = RgbaImage::new(plan.canvas_width, plan.canvas_height);

    for placement in &plan.placements {
        let source = &images[placement.index];
        imageops::overlay(
            &mut canvas,
            source,
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }

    Ok(canvas)
}

/// Encode a flattened canvas as PNG bytes
pub fn export_png(canvas: &RgbaImage) -> CollageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| CollageError::Encoding {
            details: e.to_string(),
        })?;
    Ok(bytes)
}

/// Compose and export in one step
pub fn build_collage(layout: CollageLayout, images: &[RgbaImage]) -> CollageResult<Vec<u8>> {
    let canvas = compose(layout, images)?;
    export_png(&canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, shade: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([shade, shade, shade, 255]))
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        assert_eq!(
            compose(CollageLayout::Row, &[]).unwrap_err(),
            CollageError::EmptySelection
        );
    }

    #[test]
    fn test_row_canvas_and_pixel_placement() {
        let images = vec![solid(2, 3, 50), solid(4, 2, 200)];
        let canvas = compose(CollageLayout::Row, &images).unwrap();

        assert_eq!(canvas.width(), 6);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([50, 50, 50, 255]));
        assert_eq!(canvas.get_pixel(2, 0), &Rgba([200, 200, 200, 255]));
        // Below the shorter second image the canvas stays transparent
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_column_canvas_and_pixel_placement() {
        let images = vec![solid(3, 2, 50), solid(2, 4, 200)];
        let canvas = compose(CollageLayout::Column, &images).unwrap();

        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 6);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([50, 50, 50, 255]));
        assert_eq!(canvas.get_pixel(0, 2), &Rgba([200, 200, 200, 255]));
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_grid_blank_trailing_cell() {
        // 3 images -> 2x2 grid, last cell blank
        let images = vec![solid(2, 2, 10), solid(2, 2, 20), solid(2, 2, 30)];
        let canvas = compose(CollageLayout::Grid, &images).unwrap();

        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([10, 10, 10, 255]));
        assert_eq!(canvas.get_pixel(2, 0), &Rgba([20, 20, 20, 255]));
        assert_eq!(canvas.get_pixel(0, 2), &Rgba([30, 30, 30, 255]));
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let images = vec![solid(2, 2, 10), solid(3, 3, 20)];
        let before = images.clone();
        let _ = compose(CollageLayout::Grid, &images).unwrap();
        assert_eq!(images[0].as_raw(), before[0].as_raw());
        assert_eq!(images[1].as_raw(), before[1].as_raw());
    }

    #[test]
    fn test_export_is_deterministic() {
        let images = vec![solid(5, 4, 90), solid(3, 6, 160), solid(2, 2, 240)];
        let first = build_collage(CollageLayout::Grid, &images).unwrap();
        let second = build_collage(CollageLayout::Grid, &images).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
