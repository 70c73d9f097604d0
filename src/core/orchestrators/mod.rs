pub mod app_orchestrator;
pub mod camera_capture;
pub mod image_acquisition;
