use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::core::models::SelectedImage;
use crate::global_constants::{
    CAPTURED_IMAGE_FILE_NAME, CAPTURED_IMAGE_JPEG_QUALITY, CAPTURED_IMAGE_MEDIA_TYPE,
    LOG_TAG_CAMERA,
};

/// Stops the wrapped stream when dropped, whichever way the capture exits.
struct StreamGuard {
    stream: Box<dyn CameraStream>,
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        if !self.stream.is_running() {
            return;
        }
        match self.stream.stop() {
            Ok(()) => log::debug!("{} stream stopped", LOG_TAG_CAMERA),
            Err(e) => log::warn!("{} failed to stop stream: {}", LOG_TAG_CAMERA, e),
        }
    }
}

pub fn detect_video_input(camera_device: &dyn CameraDevice) -> bool {
    match camera_device.has_video_input() {
        Ok(found) => {
            log::info!("{} video input present: {}", LOG_TAG_CAMERA, found);
            found
        }
        Err(e) => {
            log::error!("{} error checking camera access: {}", LOG_TAG_CAMERA, e);
            false
        }
    }
}

/// Opens the camera, grabs one frame and re-encodes it as a JPEG file.
pub fn capture_single_frame(camera_device: &dyn CameraDevice) -> Result<SelectedImage> {
    log::info!("{} opening camera stream", LOG_TAG_CAMERA);

    let stream = camera_device
        .open_stream()
        .context("Unable to open camera stream")?;
    let mut guard = StreamGuard { stream };

    let frame = guard
        .stream
        .read_frame()
        .context("Unable to read frame from camera")?;

    if frame.width() == 0 || frame.height() == 0 {
        anyhow::bail!("Camera returned an empty frame");
    }

    let jpeg_bytes = encode_frame_as_jpeg(&frame)?;

    log::info!(
        "{} captured {}x{} frame ({} bytes as JPEG)",
        LOG_TAG_CAMERA,
        frame.width(),
        frame.height(),
        jpeg_bytes.len()
    );

    Ok(SelectedImage::new(
        CAPTURED_IMAGE_FILE_NAME,
        CAPTURED_IMAGE_MEDIA_TYPE,
        jpeg_bytes,
    ))
}

fn encode_frame_as_jpeg(frame: &RgbImage) -> Result<Vec<u8>> {
    let mut jpeg_bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, CAPTURED_IMAGE_JPEG_QUALITY);
        encoder
            .encode_image(frame)
            .context("Unable to encode camera frame as JPEG")?;
    }
    Ok(jpeg_bytes)
}
