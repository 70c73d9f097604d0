use std::path::PathBuf;

use async_trait::async_trait;

#[async_trait]
pub trait ImageFilePicker: Send + Sync {
    /// `None` when the user cancels.
    async fn pick_image_file(&self) -> Option<PathBuf>;
}
