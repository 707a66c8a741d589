//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// `ArticleHub` - browse and search aggregated news in the terminal.
///
/// Connects to the aggregation backend, lists its categories, and shows
/// articles in a grid or list layout.
#[derive(Parser, Debug)]
#[command(name = "articlehub", version, about, long_about = None)]
pub struct Args {
    /// Base URL of the aggregation backend
    #[arg(long, env = "ARTICLEHUB_API_URL")]
    pub api_url: Option<String>,

    /// Log file path (defaults to .articlehub/articlehub.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
