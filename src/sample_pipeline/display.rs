//! Live display module
//!
//! `ImageViewer` receives rescaled frames. The `window` feature adds a
//! desktop window implementation.

mod viewer;
#[cfg(feature = "window")]
mod window_viewer;

pub use viewer::ImageViewer;
#[cfg(feature = "window")]
pub use window_viewer::WindowViewer;
