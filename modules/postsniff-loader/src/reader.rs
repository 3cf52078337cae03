//! CSV export reader.
//!
//! Expected header: `post_id,text,hashtags,likes,comments,views`. Columns are
//! matched by name, so their order is free. `views` is optional because older
//! exports stop after `comments`; missing or blank views read as zero.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use postsniff_common::Post;

use crate::error::{LoadError, LoadResult};

struct Columns {
    id: usize,
    text: usize,
    hashtags: usize,
    likes: usize,
    comments: usize,
    views: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> LoadResult<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        };
        Ok(Self {
            id: find(&["post_id", "id"]).ok_or(LoadError::MissingColumn("post_id"))?,
            text: find(&["text"]).ok_or(LoadError::MissingColumn("text"))?,
            hashtags: find(&["hashtags", "tags"]).ok_or(LoadError::MissingColumn("hashtags"))?,
            likes: find(&["likes"]).ok_or(LoadError::MissingColumn("likes"))?,
            comments: find(&["comments"]).ok_or(LoadError::MissingColumn("comments"))?,
            views: find(&["views"]),
        })
    }
}

/// Load every post from a CSV export on disk.
pub fn load_posts(path: &Path) -> LoadResult<Vec<Post>> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = parse_posts(file)?;
    info!(path = %path.display(), posts = posts.len(), "Loaded posts");
    Ok(posts)
}

/// Parse posts from any CSV source. Rows keep their input order.
pub fn parse_posts<R: Read>(reader: R) -> LoadResult<Vec<Post>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;

    let mut posts = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(|field| field.is_empty()) {
            debug!(line, "Skipping blank row");
            continue;
        }
        posts.push(parse_record(&record, &columns, line)?);
    }
    Ok(posts)
}

fn parse_record(record: &StringRecord, columns: &Columns, line: u64) -> LoadResult<Post> {
    let field = |idx: usize| record.get(idx).unwrap_or("");
    let malformed = |reason: String| LoadError::MalformedRecord { line, reason };

    let id = field(columns.id)
        .parse::<i64>()
        .map_err(|_| malformed(format!("post_id {:?} is not an integer", field(columns.id))))?;
    let likes = parse_count(field(columns.likes), "likes").map_err(malformed)?;
    let comments = parse_count(field(columns.comments), "comments").map_err(malformed)?;
    let views = match columns.views.map(field) {
        Some(raw) if !raw.is_empty() => parse_count(raw, "views").map_err(malformed)?,
        _ => 0,
    };

    Ok(Post {
        id,
        text: field(columns.text).to_string(),
        tags: parse_tags(field(columns.hashtags)),
        likes,
        comments,
        views,
    })
}

fn parse_count(raw: &str, name: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("{name} {raw:?} is not a non-negative integer"))
}

/// Split a hashtag cell into tags. Accepts `;` or whitespace separators and
/// strips a leading `#`. Order and duplicates are preserved.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ';' || c.is_whitespace())
        .map(|t| t.trim_start_matches('#'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
