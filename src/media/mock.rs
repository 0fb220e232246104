//! Mock upload endpoint for testing and development

use crate::media::upload::{
    MediaFile, StoredImage, UploadEndpoint, UploadError, UploadResult,
};

/// In-memory stand-in for the cloud image host
pub struct MockUploadEndpoint {
    /// Folder prefix minted into returned URLs
    folder: String,
    /// Every file body accepted so far, in upload order
    accepted: Vec<MediaFile>,
    /// When set, every request fails with this message
    forced_failure: Option<String>,
    request_counter: u32,
}

impl MockUploadEndpoint {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            accepted: Vec::new(),
            forced_failure: None,
            request_counter: 0,
        }
    }

    /// Make every subsequent request fail (network outage simulation)
    pub fn fail_with(&mut self, details: impl Into<String>) {
        self.forced_failure = Some(details.into());
    }

    pub fn restore(&mut self) {
        self.forced_failure = None;
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn accepted(&self) -> &[MediaFile] {
        &self.accepted
    }
}

impl UploadEndpoint for MockUploadEndpoint {
    fn upload(&mut self, files: &[MediaFile]) -> UploadResult<Vec<StoredImage>> {
        if files.is_empty() {
            return Err(UploadError::EmptyRequest);
        }
        if let Some(details) = &self.forced_failure {
            return Err(UploadError::TransferFailed {
                details: details.clone(),
            });
        }

        self.request_counter += 1;
        let mut stored = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            stored.push(StoredImage {
                url: format!(
                    "https://storage.invalid/{}/{}-{}-{}",
                    self.folder, self.request_counter, index, file.file_name
                ),
            });
            self.accepted.push(file.clone());
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::upload::ImageFileFormat;

    fn jpg(name: &str) -> MediaFile {
        MediaFile::new(name, ImageFileFormat::Jpg, vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn test_upload_returns_one_url_per_file() {
        let mut endpoint = MockUploadEndpoint::new("memories");
        let stored = endpoint.upload(&[jpg("a.jpg"), jpg("b.jpg")]).unwrap();

        assert_eq!(stored.len(), 2);
        assert!(stored[0].url.contains("memories"));
        assert!(stored[0].url.ends_with("a.jpg"));
        assert!(stored[1].url.ends_with("b.jpg"));
        assert_eq!(endpoint.accepted_count(), 2);
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let mut endpoint = MockUploadEndpoint::new("memories");
        assert_eq!(endpoint.upload(&[]).unwrap_err(), UploadError::EmptyRequest);
    }

    #[test]
    fn test_forced_failure_has_no_partial_success() {
        let mut endpoint = MockUploadEndpoint::new("memories");
        endpoint.fail_with("connection reset");

        let err = endpoint.upload(&[jpg("a.jpg")]).unwrap_err();
        assert_eq!(
            err,
            UploadError::TransferFailed {
                details: "connection reset".to_string()
            }
        );
        assert_eq!(endpoint.accepted_count(), 0);

        endpoint.restore();
        assert!(endpoint.upload(&[jpg("a.jpg")]).is_ok());
    }

    #[test]
    fn test_extension_allow_list() {
        assert_eq!(ImageFileFormat::from_extension("JPG"), Some(ImageFileFormat::Jpg));
        assert_eq!(ImageFileFormat::from_extension("jpeg"), Some(ImageFileFormat::Jpeg));
        assert_eq!(ImageFileFormat::from_extension("png"), Some(ImageFileFormat::Png));
        assert_eq!(ImageFileFormat::from_extension("gif"), None);
        assert_eq!(ImageFileFormat::from_extension("webp"), None);
    }
}
