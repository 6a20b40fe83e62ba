use minifb::{Key, Window, WindowOptions};
use tracing::debug;

use crate::sample_pipeline::common::error::{Result, SampleImageError};
use crate::sample_pipeline::display::viewer::ImageViewer;
use crate::sample_pipeline::sample_image::ScaledFrame;

fn gray_pixel(value: u8) -> u32 {
    let v = value as u32;
    (v << 16) | (v << 8) | v
}

/// Shows frames in a desktop window, reopening it when the frame size
/// changes or the user closed it.
pub struct WindowViewer {
    title: String,
    window: Option<Window>,
}

impl WindowViewer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.window.as_ref().is_some_and(Window::is_open)
    }

    /// Keeps pumping window events until the user closes the window or
    /// presses Escape.
    pub fn wait_until_closed(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };

        window.set_target_fps(30);
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window.update();
        }
        self.window = None;
    }
}

impl ImageViewer for WindowViewer {
    fn present(&mut self, frame: &ScaledFrame) -> Result<()> {
        let size = (frame.width, frame.height);

        let window = match self.window.take() {
            Some(window) if window.is_open() && window.get_size() == size => window,
            _ => {
                debug!("Opening {}x{} window", frame.width, frame.height);
                Window::new(&self.title, frame.width, frame.height, WindowOptions::default())
                    .map_err(|e| SampleImageError::DisplayError(e.to_string()))?
            }
        };
        let window = self.window.insert(window);

        let buffer: Vec<u32> = frame.data.iter().map(|&v| gray_pixel(v)).collect();
        window
            .update_with_buffer(&buffer, frame.width, frame.height)
            .map_err(|e| SampleImageError::DisplayError(e.to_string()))
    }
}
