use anyhow::{Context, Result};
use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::global_constants::LOG_TAG_CAMERA;

/// The first camera the platform backend reports.
pub struct NokhwaCameraDevice;

impl NokhwaCameraDevice {
    pub fn initialize() -> Self {
        log::debug!("{} initializing native camera device", LOG_TAG_CAMERA);
        Self
    }
}

impl CameraDevice for NokhwaCameraDevice {
    fn has_video_input(&self) -> Result<bool> {
        let cameras = nokhwa::query(ApiBackend::Auto).context("Unable to enumerate cameras")?;
        log::debug!("{} found {} camera(s)", LOG_TAG_CAMERA, cameras.len());
        Ok(!cameras.is_empty())
    }

    fn open_stream(&self) -> Result<Box<dyn CameraStream>> {
        let requested_format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let mut camera = Camera::new(CameraIndex::Index(0), requested_format)
            .context("Unable to access camera")?;
        camera.open_stream().context("Unable to start camera stream")?;

        log::debug!("{} stream opened on {}", LOG_TAG_CAMERA, camera.info().human_name());

        Ok(Box::new(NokhwaCameraStream {
            camera,
            running: true,
        }))
    }
}

struct NokhwaCameraStream {
    camera: Camera,
    running: bool,
}

impl CameraStream for NokhwaCameraStream {
    fn read_frame(&mut self) -> Result<RgbImage> {
        let buffer = self.camera.frame().context("Unable to grab camera frame")?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .context("Unable to decode camera frame")?;

        let (width, height) = (decoded.width(), decoded.height());
        RgbImage::from_raw(width, height, decoded.into_raw())
            .ok_or_else(|| anyhow::anyhow!("Camera frame has an unexpected size"))
    }

    fn stop(&mut self) -> Result<()> {
        self.running = false;
        self.camera.stop_stream().context("Unable to stop camera stream")
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
