use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageFilePicker;
use crate::global_constants::{IMAGE_FILE_EXTENSIONS, LOG_TAG_ACQUISITION};

/// Native open dialog, filtered to common image extensions.
pub struct RfdImageFilePicker;

impl RfdImageFilePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageFilePicker for RfdImageFilePicker {
    async fn pick_image_file(&self) -> Option<PathBuf> {
        log::debug!("{} opening file dialog", LOG_TAG_ACQUISITION);

        let handle = rfd::AsyncFileDialog::new()
            .set_title("Choose a plant photo")
            .add_filter("Images", IMAGE_FILE_EXTENSIONS)
            .pick_file()
            .await;

        match handle {
            Some(file) => {
                let path = file.path().to_path_buf();
                log::info!("{} file chosen: {:?}", LOG_TAG_ACQUISITION, path);
                Some(path)
            }
            None => {
                log::debug!("{} file dialog cancelled", LOG_TAG_ACQUISITION);
                None
            }
        }
    }
}
