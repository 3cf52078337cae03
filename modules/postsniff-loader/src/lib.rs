//! Loads post exports into in-memory [`Post`](postsniff_common::Post) records.

pub mod error;
pub mod reader;

pub use error::{LoadError, LoadResult};
pub use reader::{load_posts, parse_posts, parse_tags};
