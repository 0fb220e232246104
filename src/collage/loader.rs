//! Image decoding and the decode join
//!
//! The compositor only runs once every selected image has finished decoding.
//! `DecodeJoin` makes that barrier explicit: one slot per selected image,
//! filled in whatever order decodes complete, readable only when no slot is
//! pending. Placement always follows the original selection order, so the
//! completion order cannot affect the output.
//!
//! A failed decode drops that image from the collage rather than failing the
//! whole build; the outcome records which indices were dropped and why.

use crate::collage::error::{CollageError, CollageResult};
use image::RgbaImage;

/// State of one selected image inside the join
#[derive(Debug, Clone)]
enum DecodeSlot {
    Pending,
    Ready(RgbaImage),
    Dropped { reason: String },
}

/// Aggregated result once every decode has completed
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    /// Surviving images, in selection order
    pub images: Vec<RgbaImage>,
    /// Selection indices that failed to decode, with the decoder's reason
    pub dropped: Vec<(usize, String)>,
}

impl DecodeOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Join over N independent decode operations
#[derive(Debug)]
pub struct DecodeJoin {
    slots: Vec<DecodeSlot>,
}

impl DecodeJoin {
    /// Create a join with one pending slot per selected image
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![DecodeSlot::Pending; count],
        }
    }

    /// Record a decode completion for the image at `index` in the selection.
    ///
    /// Completions may arrive in any order, but each slot resolves once.
    pub fn resolve(
        &mut self,
        index: usize,
        result: Result<RgbaImage, String>,
    ) -> CollageResult<()> {
        let slots = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CollageError::SlotOutOfRange { index, slots })?;

        if !matches!(slot, DecodeSlot::Pending) {
            return Err(CollageError::SlotAlreadyResolved { index });
        }

        *slot = match result {
            Ok(image) => DecodeSlot::Ready(image),
            Err(reason) => DecodeSlot::Dropped { reason },
        };
        Ok(())
    }

    /// Number of slots still waiting on a decode
    pub fn pending(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, DecodeSlot::Pending))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.pending() == 0
    }

    /// Consume the join once complete, yielding survivors in selection order
    pub fn finish(self) -> CollageResult<DecodeOutcome> {
        let pending = self.pending();
        if pending > 0 {
            return Err(CollageError::JoinIncomplete { pending });
        }

        let mut images = Vec::new();
        let mut dropped = Vec::new();
        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                DecodeSlot::Ready(image) => images.push(image),
                DecodeSlot::Dropped { reason } => dropped.push((index, reason)),
                DecodeSlot::Pending => unreachable!("pending slots checked above"),
            }
        }

        Ok(DecodeOutcome { images, dropped })
    }
}

/// Decode raw image bytes into an RGBA raster
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, String> {
    image::load_from_memory(bytes)
        .map(|decoded| decoded.to_rgba8())
        .map_err(|e| e.to_string())
}

/// Decode a full selection in order, joining over every completion
pub fn decode_selection(selection: &[Vec<u8>]) -> CollageResult<DecodeOutcome> {
    let mut join = DecodeJoin::new(selection.len());
    for (index, bytes) in selection.iter().enumerate() {
        join.resolve(index, decode_image(bytes))?;
    }
    join.finish()
}
