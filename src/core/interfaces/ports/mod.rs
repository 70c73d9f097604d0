mod camera_device;

pub use camera_device::{CameraDevice, CameraStream};
