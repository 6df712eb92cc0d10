// Core error and result types for climrs
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
