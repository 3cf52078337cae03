pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, FileConfig, DEFAULT_TOP_POSTS};
pub use error::SniffError;
pub use types::*;
