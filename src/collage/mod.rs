//! Photo collage compositor
//!
//! Arranges a selection of decoded photos into a row, column, or grid and
//! flattens them into a single lossless raster. Layout planning is pure;
//! composition waits on an explicit join over all pending image decodes.

pub mod error;
pub mod layout;
pub mod loader;
pub mod compositor;

pub use error::{CollageError, CollageResult};
pub use layout::{plan, CollageLayout, CollagePlan, ImageDimensions, Placement};
pub use loader::{decode_image, decode_selection, DecodeJoin, DecodeOutcome};
pub use compositor::{build_collage, compose, export_png, plan_for_images};
