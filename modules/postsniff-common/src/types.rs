use serde::Serialize;
use typed_builder::TypedBuilder;

// --- Post ---

/// A single social-media post with its engagement counters and hashtags.
///
/// Records are produced by the loader and consumed read-only by the trend
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct Post {
    pub id: i64,
    #[builder(default, setter(into))]
    pub text: String,
    /// Hashtags without the leading `#`, in the order they were written.
    #[builder(default)]
    pub tags: Vec<String>,
    #[builder(default)]
    pub likes: u64,
    #[builder(default)]
    pub comments: u64,
    #[builder(default)]
    pub views: u64,
}

impl Post {
    /// Popularity key: views, then likes, then comments.
    pub fn engagement_key(&self) -> (u64, u64, u64) {
        (self.views, self.likes, self.comments)
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post{{id={}, text='{}', tags=[{}], likes={}, comments={}, views={}}}",
            self.id,
            self.text,
            self.tags.join(", "),
            self.likes,
            self.comments,
            self.views
        )
    }
}
