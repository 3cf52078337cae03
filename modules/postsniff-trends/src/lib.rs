//! Hashtag trend detection.
//!
//! The pipeline is linear: rank posts by popularity ([`top_posts`]), flatten
//! the tags of the top cohort ([`flatten_tags`]) and take their mode
//! ([`mode`]). [`find_trend`] runs all three.

pub mod cohort;
pub mod error;
pub mod finder;
pub mod mode;
pub mod ranker;
pub mod report;
pub mod tags;

pub use cohort::CohortSize;
pub use error::TrendError;
pub use finder::{find_trend, HashtagTrend, TrendFinder};
pub use mode::{mode, modes_of, tag_frequencies};
pub use postsniff_common::DEFAULT_TOP_POSTS;
pub use ranker::top_posts;
pub use report::{render_list, TagCount, TrendReport};
pub use tags::flatten_tags;
