use anyhow::Result;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::global_constants::LOG_TAG_CAMERA;

/// Used when the binary is built without the `camera` feature.
#[cfg_attr(feature = "camera", allow(dead_code))]
pub struct UnavailableCameraDevice;

#[cfg_attr(feature = "camera", allow(dead_code))]
impl UnavailableCameraDevice {
    pub fn initialize() -> Self {
        log::info!("{} camera support not compiled in", LOG_TAG_CAMERA);
        Self
    }
}

impl CameraDevice for UnavailableCameraDevice {
    fn has_video_input(&self) -> Result<bool> {
        Ok(false)
    }

    fn open_stream(&self) -> Result<Box<dyn CameraStream>> {
        anyhow::bail!("camera support is not enabled in this build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_no_video_input() {
        let device = UnavailableCameraDevice::initialize();

        assert!(!device.has_video_input().unwrap());
        assert!(device.open_stream().is_err());
    }
}
