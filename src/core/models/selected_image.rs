use std::path::Path;
use std::sync::Arc;

use base64::Engine;

/// One image chosen by the user, ready to preview and submit.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub file_name: String,
    pub media_type: String,
    bytes: Arc<[u8]>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("byte_len", &self.bytes.len())
            .finish()
    }
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Wraps file contents, declaring the media type from the file extension.
    pub fn from_file_contents(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::new(file_name, declared_media_type(path), bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encode_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Media type a file would be declared with, or empty when the extension is unknown.
pub fn declared_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default()
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_file_contents_declares_type_from_extension() {
        let image = SelectedImage::from_file_contents(&PathBuf::from("/tmp/fern.PNG"), vec![1, 2]);

        assert_eq!(image.file_name, "fern.PNG");
        assert_eq!(image.media_type, "image/png");
        assert!(is_image_media_type(&image.media_type));
    }

    #[test]
    fn test_from_file_contents_with_unknown_extension_has_empty_type() {
        let image = SelectedImage::from_file_contents(&PathBuf::from("notes.zzqx"), vec![]);

        assert_eq!(image.media_type, "");
        assert!(!is_image_media_type(&image.media_type));
    }

    #[test]
    fn test_declared_media_type_for_text_file_is_not_image() {
        let media_type = declared_media_type(&PathBuf::from("readme.txt"));

        assert_eq!(media_type, "text/plain");
        assert!(!is_image_media_type(&media_type));
    }

    #[test]
    fn test_encode_base64_uses_standard_alphabet() {
        let image = SelectedImage::new("leaf.jpg", "image/jpeg", b"leaf".to_vec());

        assert_eq!(image.encode_base64(), "bGVhZg==");
    }

    #[test]
    fn test_debug_output_omits_raw_bytes() {
        let image = SelectedImage::new("leaf.jpg", "image/jpeg", vec![7u8; 4096]);

        let debug = format!("{:?}", image);

        assert!(debug.contains("byte_len: 4096"));
        assert!(!debug.contains("7, 7"));
    }
}
