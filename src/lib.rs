//! `ArticleHub` - terminal client for a news aggregation backend
//!
//! Browses articles by category and runs keyword or AI-assisted searches.

pub mod app;
pub mod cli;
pub mod core;
pub mod fs;
pub mod logging;
pub mod tui;
