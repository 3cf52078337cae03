//! Popularity ranking: more views, then more likes, then more comments.

use std::cmp::Reverse;

use postsniff_common::Post;

/// Return the `limit` most popular posts, best first.
///
/// Ordering is descending on `(views, likes, comments)`. The sort is stable,
/// so posts that tie on all three keep their input order. A `limit` past the
/// end returns every post; zero returns none. The input is left untouched.
pub fn top_posts(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut ranked: Vec<&Post> = posts.iter().collect();
    ranked.sort_by_key(|p| Reverse(p.engagement_key()));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, views: u64, likes: u64, comments: u64) -> Post {
        Post::builder()
            .id(id)
            .views(views)
            .likes(likes)
            .comments(comments)
            .build()
    }

    fn ids(posts: &[&Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn views_dominate_likes_and_comments() {
        let posts = vec![post(1, 10, 99, 99), post(2, 20, 0, 0)];
        assert_eq!(ids(&top_posts(&posts, 2)), vec![2, 1]);
    }

    #[test]
    fn likes_break_view_ties_descending() {
        let posts = vec![post(1, 10, 1, 50), post(2, 10, 5, 0), post(3, 10, 3, 0)];
        assert_eq!(ids(&top_posts(&posts, 3)), vec![2, 3, 1]);
    }

    #[test]
    fn comments_break_view_and_like_ties_descending() {
        let posts = vec![post(1, 10, 5, 1), post(2, 10, 5, 9)];
        assert_eq!(ids(&top_posts(&posts, 2)), vec![2, 1]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let posts = vec![post(4, 7, 7, 7), post(2, 7, 7, 7), post(9, 7, 7, 7)];
        assert_eq!(ids(&top_posts(&posts, 3)), vec![4, 2, 9]);
    }

    #[test]
    fn limit_truncates() {
        let posts = vec![post(1, 1, 0, 0), post(2, 2, 0, 0), post(3, 3, 0, 0)];
        assert_eq!(ids(&top_posts(&posts, 2)), vec![3, 2]);
    }

    #[test]
    fn limit_past_end_returns_everything() {
        let posts = vec![post(1, 1, 0, 0), post(2, 2, 0, 0)];
        assert_eq!(top_posts(&posts, 50).len(), 2);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let posts = vec![post(1, 1, 0, 0)];
        assert!(top_posts(&posts, 0).is_empty());
    }

    #[test]
    fn input_order_is_not_mutated() {
        let posts = vec![post(1, 1, 0, 0), post(2, 2, 0, 0)];
        let before = posts.clone();
        let _ = top_posts(&posts, 2);
        assert_eq!(posts, before);
    }
}
