//! Publish and modify dates from markdown frontmatter.
//!
//! Only three keys matter for the sitemap, so the block is scanned line by
//! line instead of being deserialized. Each key is matched on its own and
//! the first occurrence wins.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

/// Leading `---` block at the very start of the file.
static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\r?\n((?s:.*?))\r?\n---").expect("valid regex"));

static PUB_DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("pubDatetime"));
static MOD_DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("modDatetime"));
static DRAFT_RE: LazyLock<Regex> = LazyLock::new(|| field_regex("draft"));

/// Naive formats, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn field_regex(key: &str) -> Regex {
    Regex::new(&format!(r"(?m)^[ \t]*{key}:(.*)$")).expect("valid regex")
}

fn field_value(re: &Regex, block: &str) -> Option<String> {
    let value = re.captures(block)?.get(1)?.as_str().trim();
    let value = strip_quotes(value).trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Return the frontmatter block of a markdown file, without delimiters.
///
/// The opening `---` must be the first line of the file.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a frontmatter date.
///
/// Accepts RFC 3339 and RFC 2822 timestamps, naive date-times (taken as
/// UTC) and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sitemap-relevant post metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    /// Raw `pubDatetime` value.
    pub pub_datetime: String,

    /// Raw `modDatetime` value.
    pub mod_datetime: Option<String>,

    /// `draft: true` was set.
    pub draft: bool,
}

impl PostMeta {
    /// Extract metadata from a whole markdown file.
    ///
    /// Returns `None` when there is no frontmatter block or the block has
    /// no `pubDatetime`.
    pub fn parse(content: &str) -> Option<Self> {
        Self::from_frontmatter(extract_frontmatter(content)?)
    }

    /// Extract metadata from an already isolated frontmatter block.
    pub fn from_frontmatter(block: &str) -> Option<Self> {
        let pub_datetime = field_value(&PUB_DATETIME_RE, block)?;
        let mod_datetime = field_value(&MOD_DATETIME_RE, block);
        let draft = field_value(&DRAFT_RE, block).is_some_and(|v| v == "true");

        Some(Self {
            pub_datetime,
            mod_datetime,
            draft,
        })
    }

    /// Whether the post is a draft.
    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// Parsed publish date.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.pub_datetime)
    }

    /// Parsed modify date.
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.mod_datetime.as_deref().and_then(parse_datetime)
    }

    /// Last-modified date: the modify date when it parses, else the
    /// publish date.
    pub fn lastmod(&self) -> Option<DateTime<Utc>> {
        self.modified().or_else(|| self.published())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_extract_frontmatter() {
        let content = "---\ntitle: Hello\npubDatetime: 2024-01-14\n---\n\nBody";
        assert_eq!(
            extract_frontmatter(content),
            Some("title: Hello\npubDatetime: 2024-01-14")
        );
    }

    #[test]
    fn test_extract_frontmatter_crlf() {
        let content = "---\r\npubDatetime: 2024-01-14\r\n---\r\nBody";
        let block = extract_frontmatter(content).expect("block");
        assert!(block.contains("pubDatetime"));
    }

    #[test]
    fn test_frontmatter_must_start_the_file() {
        assert!(extract_frontmatter("\n---\npubDatetime: 2024-01-14\n---\n").is_none());
        assert!(extract_frontmatter("# Title\n---\na: b\n---\n").is_none());
        assert!(extract_frontmatter("no frontmatter").is_none());
    }

    #[test]
    fn test_frontmatter_is_non_greedy() {
        let content = "---\npubDatetime: 2024-01-14\n---\nbody\n---\ndraft: true\n---\n";
        let meta = PostMeta::parse(content).expect("meta");
        assert!(!meta.is_draft());
    }

    #[test]
    fn test_parse_post_meta() {
        let content = r#"---
title: "Hello"
pubDatetime: 2024-01-14T10:00:00Z
modDatetime: "2024-02-01T08:30:00+08:00"
draft: false
tags:
  - rust
---

Content here."#;

        let meta = PostMeta::parse(content).expect("meta");
        assert_eq!(meta.pub_datetime, "2024-01-14T10:00:00Z");
        assert_eq!(
            meta.mod_datetime.as_deref(),
            Some("2024-02-01T08:30:00+08:00")
        );
        assert!(!meta.is_draft());
        assert_eq!(
            meta.lastmod(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_missing_pub_datetime() {
        assert!(PostMeta::parse("---\ntitle: Hello\n---\n").is_none());
        assert!(PostMeta::parse("---\npubDatetime:\n---\n").is_none());
    }

    #[test]
    fn test_draft_flag() {
        let draft = PostMeta::parse("---\npubDatetime: 2024-01-14\ndraft: true\n---\n").unwrap();
        assert!(draft.is_draft());

        let quoted = PostMeta::parse("---\npubDatetime: 2024-01-14\ndraft: 'true'\n---\n").unwrap();
        assert!(quoted.is_draft());

        let other = PostMeta::parse("---\npubDatetime: 2024-01-14\ndraft: yes\n---\n").unwrap();
        assert!(!other.is_draft());
    }

    #[test]
    fn test_first_match_wins() {
        let meta = PostMeta::parse(
            "---\npubDatetime: 2024-01-01\npubDatetime: 2025-01-01\n---\n",
        )
        .unwrap();
        assert_eq!(meta.pub_datetime, "2024-01-01");
    }

    #[test]
    fn test_lastmod_falls_back_to_pub_datetime() {
        let meta = PostMeta::parse(
            "---\npubDatetime: 2024-01-14\nmodDatetime: not a date\n---\n",
        )
        .unwrap();
        assert_eq!(
            meta.lastmod(),
            Some(Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_lastmod_none_when_nothing_parses() {
        let meta = PostMeta::parse("---\npubDatetime: someday\n---\n").unwrap();
        assert!(meta.lastmod().is_none());
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 9, 15, 0).unwrap();
        assert_eq!(parse_datetime("2024-03-05T09:15:00Z"), Some(expected));
        assert_eq!(parse_datetime("2024-03-05T17:15:00+08:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-05T09:15:00.000Z"), Some(expected));
        assert_eq!(parse_datetime("2024-03-05T09:15:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-05T09:15"), Some(expected));
        assert_eq!(parse_datetime("2024-03-05 09:15:00"), Some(expected));
        assert_eq!(parse_datetime("Tue, 05 Mar 2024 09:15:00 +0000"), Some(expected));
        assert_eq!(
            parse_datetime("2024-03-05"),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
        assert!(parse_datetime("2024-13-45").is_none());
        assert!(parse_datetime("").is_none());
    }
}
