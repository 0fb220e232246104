//! Media storage collaborators

pub mod upload;
pub mod mock;

pub use upload::{
    ImageFileFormat, MediaFile, StoredImage, UploadEndpoint, UploadError, UploadResult,
};
pub use mock::MockUploadEndpoint;
