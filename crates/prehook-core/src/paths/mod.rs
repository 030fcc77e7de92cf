//! Path utilities for the repository cache and project configuration.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod cache;
mod ensure;
mod error;
mod project;

#[cfg(test)]
mod test_utils;

pub use cache::{cache_root, repos_dir};
pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use project::{config_path, find_project_root};
