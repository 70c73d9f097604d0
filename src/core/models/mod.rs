mod identification_error;
mod plant_record;
mod selected_image;
mod session_state;
mod user_settings;

pub use identification_error::IdentificationError;
pub use plant_record::PlantRecord;
pub use selected_image::{declared_media_type, is_image_media_type, SelectedImage};
pub use session_state::SessionState;
pub use user_settings::{ThemeMode, UserSettings};
