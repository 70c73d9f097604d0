mod alert_presenter;
mod image_file_picker;
mod plant_identification_service;

pub use alert_presenter::AlertPresenter;
pub use image_file_picker::ImageFilePicker;
pub use plant_identification_service::PlantIdentificationService;
