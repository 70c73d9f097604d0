use std::path::Path;

use anyhow::{Context, Result};

use crate::core::models::{declared_media_type, is_image_media_type, SelectedImage};
use crate::global_constants::LOG_TAG_ACQUISITION;

/// Dropped files are only taken when their declared type is `image/*`.
pub fn is_acceptable_drop(path: &Path) -> bool {
    let media_type = declared_media_type(path);
    let accepted = is_image_media_type(&media_type);

    if !accepted {
        log::debug!(
            "{} ignoring dropped file {:?} with type '{}'",
            LOG_TAG_ACQUISITION,
            path,
            media_type
        );
    }

    accepted
}

pub async fn load_image_file(path: &Path) -> Result<SelectedImage> {
    log::debug!("{} reading image file {:?}", LOG_TAG_ACQUISITION, path);

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Unable to read {}", path.display()))?;

    let image = SelectedImage::from_file_contents(path, bytes);
    log::info!("{} loaded {:?}", LOG_TAG_ACQUISITION, image);

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_acceptable_drop_accepts_image_extensions() {
        assert!(is_acceptable_drop(&PathBuf::from("/photos/rose.jpg")));
        assert!(is_acceptable_drop(&PathBuf::from("/photos/rose.webp")));
        assert!(is_acceptable_drop(&PathBuf::from("C:/photos/ROSE.PNG")));
    }

    #[test]
    fn test_is_acceptable_drop_rejects_other_types() {
        assert!(!is_acceptable_drop(&PathBuf::from("/docs/rose.pdf")));
        assert!(!is_acceptable_drop(&PathBuf::from("/docs/rose.txt")));
        assert!(!is_acceptable_drop(&PathBuf::from("/docs/rose")));
    }

    #[tokio::test]
    async fn test_load_image_file_reads_bytes_and_type() {
        let path = std::env::temp_dir().join(format!(
            "plant-identifier-load-{}.png",
            std::process::id()
        ));
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let image = load_image_file(&path).await.unwrap();

        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.bytes(), &[0x89, b'P', b'N', b'G']);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_load_image_file_reports_missing_file() {
        let path = PathBuf::from("/definitely/not/here/plant.png");

        let error = load_image_file(&path).await.unwrap_err();

        assert!(error.to_string().contains("Unable to read"));
    }
}
