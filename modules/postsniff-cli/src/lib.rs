use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use postsniff_common::{Config, Post, SniffError};
use postsniff_trends::{CohortSize, HashtagTrend, TrendFinder, TrendReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `[tag1, tag2]`
    #[default]
    List,
    /// Full trend report as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "postsniff",
    about = "Find the most used hashtags in your most popular posts"
)]
pub struct Cli {
    /// CSV export of posts
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Number of top posts to examine (default 5)
    #[arg(long, allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Path to config TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// File and environment settings with this invocation's flags on top.
    pub fn resolve_config(&self) -> Result<Config, SniffError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(path) = &self.data {
            config.data_path = Some(path.clone());
        }
        if let Some(top) = self.top {
            config.top_posts = top;
        }
        Ok(config)
    }
}

/// Validate the cohort size and load the posts it applies to.
pub fn prepare(config: &Config) -> Result<(CohortSize, Vec<Post>), SniffError> {
    let cohort = CohortSize::try_from(config.top_posts)?;
    let data_path = config.data_path.as_deref().ok_or_else(|| {
        SniffError::InvalidArgument(
            "no data file given: pass --data, set POSTSNIFF_DATA, or set [data].path in the config"
                .to_string(),
        )
    })?;
    let posts = postsniff_loader::load_posts(data_path)?;
    Ok((cohort, posts))
}

/// Load posts, run the hashtag trend and write the result to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.resolve_config()?;
    config.log_summary();

    let (cohort, posts) = prepare(&config).context("Failed to prepare trend input")?;

    let finder = HashtagTrend;
    match cli.format {
        OutputFormat::List => {
            let trending = finder.find_trend(&posts, cohort);
            info!(cohort = %cohort, trending = trending.len(), "Trend found");
            writeln!(out, "{}", postsniff_trends::render_list(&trending))?;
        }
        OutputFormat::Json => {
            let report = TrendReport::build(&posts, cohort);
            info!(cohort = %cohort, trending = report.trending.len(), "Trend found");
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
