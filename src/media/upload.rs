//! Image upload endpoint interface
//!
//! The cloud image host is an external collaborator: one request carries one
//! or more image files and the response is a storage URL per file, or a
//! single failure for the whole request. No validation beyond the format
//! allow-list, no retries, no partial-success detail.

use std::fmt;

/// Image formats the storage host accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFileFormat {
    Jpg,
    Jpeg,
    Png,
}

impl ImageFileFormat {
    /// Map a file extension onto an accepted format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" => Some(ImageFileFormat::Jpg),
            "jpeg" => Some(ImageFileFormat::Jpeg),
            "png" => Some(ImageFileFormat::Png),
            _ => None,
        }
    }
}

/// One file in an upload request
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub file_name: String,
    pub format: ImageFileFormat,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, format: ImageFileFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            bytes,
        }
    }
}

/// Storage record returned for each uploaded file
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
}

/// Upload failures
#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The request contained no files
    EmptyRequest,
    /// A file's extension is outside the host's allow-list
    UnsupportedFormat { file_name: String, extension: String },
    /// The exchange with the host failed; no per-file detail is available
    TransferFailed { details: String },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::EmptyRequest => write!(f, "Upload request contained no files"),
            UploadError::UnsupportedFormat { file_name, extension } => {
                write!(f, "Unsupported format .{} for {}", extension, file_name)
            }
            UploadError::TransferFailed { details } => {
                write!(f, "Upload failed: {}", details)
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Interface to the cloud image storage host
pub trait UploadEndpoint {
    /// Upload a batch of files, returning one storage URL per file in order
    fn upload(&mut self, files: &[MediaFile]) -> UploadResult<Vec<StoredImage>>;
}
