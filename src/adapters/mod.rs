mod gemini_plant_identifier;
mod rfd_alert_presenter;
mod rfd_image_file_picker;

pub use gemini_plant_identifier::GeminiPlantIdentifier;
pub use rfd_alert_presenter::RfdAlertPresenter;
pub use rfd_image_file_picker::RfdImageFilePicker;
