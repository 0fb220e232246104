//! Collage layout planning
//!
//! Pure placement computation: given a layout mode and the dimensions of the
//! selected images (in selection order), produce the canvas size and one
//! placement per image. Images keep their native pixel dimensions; no
//! scaling, stretching, or centering is applied.

use serde::{Deserialize, Serialize};

/// Available collage arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollageLayout {
    /// Left-to-right strip, top-aligned
    Row,
    /// Top-to-bottom strip, left-aligned
    Column,
    /// Row-major grid of uniform cells sized to the largest image
    Grid,
}

/// Pixel dimensions of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Where one image lands on the canvas, at native size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the original selection order
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas size plus per-image placements for one collage build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollagePlan {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub placements: Vec<Placement>,
}

impl CollagePlan {
    /// Number of grid columns for a selection of `count` images
    pub fn grid_columns(count: usize) -> u32 {
        (count as f64).sqrt().ceil() as u32
    }

    /// Number of grid rows for a selection of `count` images
    pub fn grid_rows(count: usize) -> u32 {
        let columns = Self::grid_columns(count);
        if columns == 0 {
            0
        } else {
            (count as u32).div_ceil(columns)
        }
    }
}

/// Compute canvas size and placements for the given layout and image sizes.
///
/// Zero-dimension images degrade naturally: they contribute nothing to sums
/// and maxima and occupy a zero-area placement. An empty slice yields an
/// empty plan with a zero-size canvas; callers that treat an empty selection
/// as an error enforce that before planning.
pub fn plan(layout: CollageLayout, dims: &[ImageDimensions]) -> CollagePlan {
    match layout {
        CollageLayout::Row => plan_row(dims),
        CollageLayout::Column => plan_column(dims),
        CollageLayout::Grid => plan_grid(dims),
    }
}

fn plan_row(dims: &[ImageDimensions]) -> CollagePlan {
    let mut placements = Vec::with_capacity(dims.len());
    let mut offset = 0u32;
    let mut max_height = 0u32;

    for (index, dim) in dims.iter().enumerate() {
        placements.push(Placement {
            index,
            x: offset,
            y: 0,
            width: dim.width,
            height: dim.height,
        });
        offset += dim.width;
        max_height = max_height.max(dim.height);
    }

    CollagePlan {
        canvas_width: offset,
        canvas_height: max_height,
        placements,
    }
}

fn plan_column(dims: &[ImageDimensions]) -> CollagePlan {
    let mut placements = Vec::with_capacity(dims.len());
    let mut offset = 0u32;
    let mut max_width = 0u32;

    for (index, dim) in dims.iter().enumerate() {
        placements.push(Placement {
            index,
            x: 0,
            y: offset,
            width: dim.width,
            height: dim.height,
        });
        offset += dim.height;
        max_width = max_width.max(dim.width);
    }

    CollagePlan {
        canvas_width: max_width,
        canvas_height: offset,
        placements,
    }
}

fn plan_grid(dims: &[ImageDimensions]) -> CollagePlan {
    if dims.is_empty() {
        return CollagePlan {
            canvas_width: 0,
            canvas_height: 0,
            placements: Vec::new(),
        };
    }

    let columns = CollagePlan::grid_columns(dims.len());
    let rows = CollagePlan::grid_rows(dims.len());
    let cell_width = dims.iter().map(|d| d.width).max().unwrap_or(0);
    let cell_height = dims.iter().map(|d| d.height).max().unwrap_or(0);

    let placements = dims
        .iter()
        .enumerate()
        .map(|(index, dim)| {
            let col = index as u32 % columns;
            let row = index as u32 / columns;
            Placement {
                index,
                x: col * cell_width,
                y: row * cell_height,
                width: dim.width,
                height: dim.height,
            }
        })
        .collect();

    CollagePlan {
        canvas_width: columns * cell_width,
        canvas_height: rows * cell_height,
        placements,
    }
}
