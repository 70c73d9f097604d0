pub mod app_theme;
mod plant_info_view;
mod upload_zone_view;

pub use plant_info_view::PlantInfoView;
pub use upload_zone_view::{UploadZoneMessage, UploadZoneView};
