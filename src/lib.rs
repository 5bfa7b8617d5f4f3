pub mod bump;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use bump::{bump, bump_version};
pub use domain::{IncrementKind, Version};
pub use error::{Result, SemverBumpError};
