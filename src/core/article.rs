//! Article model as returned by the aggregation backend.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Text shown in place of a publish date that cannot be parsed.
pub const UNKNOWN_DATE_LABEL: &str = "Recently";

/// Display format for publish dates (e.g. `Jan 5, 2025`).
const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Naive date-time layouts the backend is known to emit.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Opaque article identifier.
///
/// The backend derives ids from a hash and sends integers, but nothing in the
/// client depends on that, so string ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Where an article's content came from.
///
/// Unknown values (the backend tags RSS entries as `"feed"`) deserialize as
/// [`ArticleKind::Aggregated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleKind {
    /// Produced by the AI search backend.
    AiGenerated,
    /// Pulled from an upstream source and normalized.
    #[default]
    #[serde(other)]
    Aggregated,
}

/// A single article card's worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub link: String,
    /// Raw publish timestamp; parsed only for display.
    #[serde(default)]
    pub published: String,
    #[serde(rename = "type", default)]
    pub kind: ArticleKind,
}

impl Article {
    /// Returns true if the article was produced by the AI search backend.
    #[must_use]
    pub const fn is_ai_generated(&self) -> bool {
        matches!(self.kind, ArticleKind::AiGenerated)
    }

    /// Returns the publish date formatted for display.
    #[must_use]
    pub fn published_label(&self) -> String {
        format_published(&self.published)
    }
}

/// Formats a raw publish timestamp as `Mon D, YYYY`.
///
/// Accepts RFC 3339, RFC 2822 (what RSS feeds use), naive ISO date-times and
/// plain dates. Anything else yields [`UNKNOWN_DATE_LABEL`].
#[must_use]
pub fn format_published(raw: &str) -> String {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    match date {
        Some(date) => date.format(DATE_DISPLAY_FORMAT).to_string(),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}
