use async_trait::async_trait;

use crate::core::models::{IdentificationError, PlantRecord, SelectedImage};

#[async_trait]
pub trait PlantIdentificationService: Send + Sync {
    async fn identify_plant(&self, image: &SelectedImage)
        -> Result<PlantRecord, IdentificationError>;
}
