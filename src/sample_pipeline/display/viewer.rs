use crate::sample_pipeline::common::error::Result;
use crate::sample_pipeline::sample_image::ScaledFrame;

/// Something that can show an 8-bit frame.
///
/// `present` requests a single redraw and returns without waiting for the
/// user.
pub trait ImageViewer {
    fn present(&mut self, frame: &ScaledFrame) -> Result<()>;
}
