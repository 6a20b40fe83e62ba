//! Common utilities module
//!
//! This module contains shared utilities used across the sample pipeline.

pub mod error;

pub use error::{Result, SampleImageError};
