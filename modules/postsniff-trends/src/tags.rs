use postsniff_common::Post;

/// Flatten the tags of `posts` into one list, post by post, keeping each
/// post's tag order and every duplicate.
pub fn flatten_tags<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect()
}
