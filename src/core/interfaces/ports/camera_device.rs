use anyhow::Result;
use image::RgbImage;

pub trait CameraDevice: Send + Sync {
    fn has_video_input(&self) -> Result<bool>;
    fn open_stream(&self) -> Result<Box<dyn CameraStream>>;
}

/// A running video stream. Callers must call [`CameraStream::stop`] once done.
pub trait CameraStream {
    fn read_frame(&mut self) -> Result<RgbImage>;
    fn stop(&mut self) -> Result<()>;
    fn is_running(&self) -> bool;
}
