//! Configuration file handling.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_PAGE_SIZE};
pub use types::{ApiConfig, Config, ViewConfig, DEFAULT_BRIEF_LIMIT, DEFAULT_PAGE_SIZE};
