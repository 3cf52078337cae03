use std::collections::BTreeSet;

use serde::Serialize;

use postsniff_common::Post;

use crate::cohort::CohortSize;
use crate::finder::{HashtagTrend, TrendFinder};
use crate::mode::{modes_of, tag_frequencies};
use crate::ranker::top_posts;
use crate::tags::flatten_tags;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Everything behind one hashtag trend answer, for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub finder: &'static str,
    pub cohort_size: CohortSize,
    pub total_posts: usize,
    pub top_post_ids: Vec<i64>,
    /// Highest count first, ties by tag name.
    pub tag_counts: Vec<TagCount>,
    pub max_count: usize,
    pub trending: BTreeSet<String>,
}

impl TrendReport {
    pub fn build(posts: &[Post], cohort: CohortSize) -> Self {
        let top = top_posts(posts, cohort.get());
        let counts = tag_frequencies(flatten_tags(&top));

        let mut tag_counts: Vec<TagCount> = counts
            .iter()
            .map(|(tag, count)| TagCount {
                tag: tag.clone(),
                count: *count,
            })
            .collect();
        tag_counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        let max_count = tag_counts.first().map(|tc| tc.count).unwrap_or(0);

        Self {
            finder: HashtagTrend.name(),
            cohort_size: cohort,
            total_posts: posts.len(),
            top_post_ids: top.iter().map(|p| p.id).collect(),
            tag_counts,
            max_count,
            trending: modes_of(counts),
        }
    }

    pub fn render_list(&self) -> String {
        render_list(&self.trending)
    }
}

/// Render a result set as `[a, b]`.
pub fn render_list(items: &BTreeSet<String>) -> String {
    let joined = items.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}
