// Core modules
pub mod build;
pub mod config;
pub mod error;
pub mod escape;
pub mod record;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use error::{CvtexError, Result};
