//! Most-frequent tag detection.
//!
//! One pass builds a tag -> count table, a second pass over the table finds
//! the highest count and every tag that reaches it.

use std::collections::{BTreeSet, HashMap};

/// Count occurrences of each distinct tag.
pub fn tag_frequencies<I>(tags: I) -> HashMap<String, usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for tag in tags {
        let tag = tag.as_ref();
        match counts.get_mut(tag) {
            Some(count) => *count += 1,
            None => {
                counts.insert(tag.to_string(), 1);
            }
        }
    }
    counts
}

/// Every tag tied for the highest count. Empty input gives an empty set.
pub fn mode<I>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    modes_of(tag_frequencies(tags))
}

/// Select the tags whose count equals the table's maximum.
pub fn modes_of(counts: HashMap<String, usize>) -> BTreeSet<String> {
    let Some(max_count) = counts.values().copied().max() else {
        return BTreeSet::new();
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(tag, _)| tag)
        .collect()
}
