#[cfg(feature = "camera")]
mod nokhwa_camera_device;
mod unavailable_camera_device;

#[cfg(feature = "camera")]
pub use nokhwa_camera_device::NokhwaCameraDevice;
#[cfg_attr(feature = "camera", allow(unused_imports))]
pub use unavailable_camera_device::UnavailableCameraDevice;
