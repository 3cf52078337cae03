use std::collections::BTreeSet;

use tracing::debug;

use postsniff_common::Post;

use crate::cohort::CohortSize;
use crate::mode::mode;
use crate::ranker::top_posts;
use crate::tags::flatten_tags;

/// Most frequent hashtag(s) among the `top_k` most popular posts.
///
/// Returns an empty set when there are no posts or none of the top posts
/// carry tags.
pub fn find_trend(all_posts: &[Post], top_k: usize) -> BTreeSet<String> {
    let top = top_posts(all_posts, top_k);
    let tags = flatten_tags(&top);
    let trending = mode(&tags);
    debug!(
        posts = all_posts.len(),
        top_posts = top.len(),
        tags = tags.len(),
        trending = trending.len(),
        "Computed hashtag trend"
    );
    trending
}

/// A kind of trend that can be read off a set of posts.
///
/// Implementations are interchangeable; the caller picks which one to run.
pub trait TrendFinder: Send + Sync {
    fn name(&self) -> &'static str;

    fn find_trend(&self, posts: &[Post], cohort: CohortSize) -> BTreeSet<String>;
}

/// Most used hashtags in the most popular posts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashtagTrend;

impl TrendFinder for HashtagTrend {
    fn name(&self) -> &'static str {
        "hashtag"
    }

    fn find_trend(&self, posts: &[Post], cohort: CohortSize) -> BTreeSet<String> {
        find_trend(posts, cohort.get())
    }
}
