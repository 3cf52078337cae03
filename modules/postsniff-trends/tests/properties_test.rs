use std::collections::BTreeSet;

use proptest::prelude::*;

use postsniff_common::Post;
use postsniff_trends::{find_trend, flatten_tags, mode, tag_frequencies, top_posts};

fn arb_post() -> impl Strategy<Value = Post> {
    (
        any::<i64>(),
        0u64..20,
        0u64..20,
        0u64..20,
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..4),
    )
        .prop_map(|(id, views, likes, comments, tags)| {
            Post::builder()
                .id(id)
                .views(views)
                .likes(likes)
                .comments(comments)
                .tags(tags.into_iter().map(str::to_string).collect())
                .build()
        })
}

fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec(arb_post(), 0..30)
}

proptest! {
    #[test]
    fn ranking_is_deterministic(posts in arb_posts(), limit in 0usize..40) {
        let first: Vec<*const Post> = top_posts(&posts, limit).into_iter().map(|p| p as *const Post).collect();
        let second: Vec<*const Post> = top_posts(&posts, limit).into_iter().map(|p| p as *const Post).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ranked_neighbours_are_ordered(posts in arb_posts()) {
        let ranked = top_posts(&posts, posts.len());
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ordered = a.views > b.views
                || (a.views == b.views && a.likes > b.likes)
                || (a.views == b.views && a.likes == b.likes && a.comments >= b.comments);
            prop_assert!(ordered, "{} ranked before {}", a, b);
        }
    }

    #[test]
    fn full_ties_keep_input_positions(posts in arb_posts()) {
        let position = |p: &Post| posts.iter().position(|q| std::ptr::eq(q, p)).unwrap();
        let ranked = top_posts(&posts, posts.len());
        for pair in ranked.windows(2) {
            if pair[0].engagement_key() == pair[1].engagement_key() {
                prop_assert!(position(pair[0]) < position(pair[1]));
            }
        }
    }

    #[test]
    fn limit_is_min_of_request_and_size(posts in arb_posts(), limit in 0usize..40) {
        prop_assert_eq!(top_posts(&posts, limit).len(), limit.min(posts.len()));
    }

    #[test]
    fn flatten_keeps_every_tag_of_the_cohort(posts in arb_posts(), limit in 0usize..40) {
        let top = top_posts(&posts, limit);
        let expected: usize = top.iter().map(|p| p.tags.len()).sum();
        prop_assert_eq!(flatten_tags(&top).len(), expected);
    }

    #[test]
    fn mode_is_exactly_the_max_count_tags(tags in prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 0..50)) {
        let counts = tag_frequencies(&tags);
        let max = counts.values().copied().max().unwrap_or(0);
        let expected: BTreeSet<String> = counts
            .iter()
            .filter(|(_, c)| **c == max)
            .map(|(t, _)| t.clone())
            .collect();
        prop_assert_eq!(mode(&tags), expected);
    }

    #[test]
    fn find_trend_is_idempotent(posts in arb_posts(), limit in 0usize..10) {
        prop_assert_eq!(find_trend(&posts, limit), find_trend(&posts, limit));
    }
}
