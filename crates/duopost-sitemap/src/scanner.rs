//! Last-modified dates for the sitemap.
//!
//! Walks the blog source directory and maps every published post URL to
//! its last-modified date. Files that cannot contribute a date are skipped,
//! never reported as errors.

use std::{
    collections::BTreeMap,
    fs,
    path::{Component, Path, PathBuf},
};

use chrono::{DateTime, Utc};
use duopost_core::{Locale, PostMeta, locale_prefix, slugify};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Post URL to last-modified date, ordered by URL.
pub type SitemapDates = BTreeMap<String, DateTime<Utc>>;

/// Counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Markdown files looked at.
    pub scanned: usize,
    /// Files that produced a sitemap entry.
    pub included: usize,
    /// Files skipped because of `draft: true`.
    pub drafts: usize,
    /// Files without a frontmatter block or `pubDatetime`.
    pub missing_frontmatter: usize,
    /// Files whose dates did not parse.
    pub invalid_dates: usize,
    /// Files or directories that could not be read.
    pub unreadable: usize,
}

/// Scans markdown sources for sitemap dates.
#[derive(Debug, Clone)]
pub struct SitemapScanner {
    blog_dir: PathBuf,
}

impl SitemapScanner {
    /// Create a scanner rooted at the blog source directory.
    #[must_use]
    pub fn new(blog_dir: impl Into<PathBuf>) -> Self {
        Self {
            blog_dir: blog_dir.into(),
        }
    }

    /// The blog source directory.
    pub fn blog_dir(&self) -> &Path {
        &self.blog_dir
    }

    /// Map post URLs under `base_url` to their last-modified dates.
    pub fn scan(&self, base_url: &str) -> SitemapDates {
        self.scan_with_stats(base_url).0
    }

    /// Like [`scan`](Self::scan), also returning scan counters.
    pub fn scan_with_stats(&self, base_url: &str) -> (SitemapDates, ScanStats) {
        let mut dates = SitemapDates::new();
        let mut stats = ScanStats::default();

        if !self.blog_dir.is_dir() {
            debug!(dir = %self.blog_dir.display(), "blog directory missing, nothing to scan");
            return (dates, stats);
        }

        info!(dir = %self.blog_dir.display(), "scanning posts for sitemap dates");

        let walker = WalkDir::new(&self.blog_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_private(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "failed to read blog directory entry");
                    stats.unreadable += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown(path) {
                continue;
            }
            stats.scanned += 1;

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read post");
                    stats.unreadable += 1;
                    continue;
                }
            };

            let Some(meta) = PostMeta::parse(&content) else {
                debug!(path = %path.display(), "skipping post without pubDatetime");
                stats.missing_frontmatter += 1;
                continue;
            };

            if meta.is_draft() {
                debug!(path = %path.display(), "skipping draft");
                stats.drafts += 1;
                continue;
            }

            let Some(lastmod) = meta.lastmod() else {
                debug!(
                    path = %path.display(),
                    pub_datetime = %meta.pub_datetime,
                    "skipping post with unparseable dates"
                );
                stats.invalid_dates += 1;
                continue;
            };

            let relative = path.strip_prefix(&self.blog_dir).unwrap_or(path);
            let Some(url) = post_sitemap_url(relative, base_url) else {
                continue;
            };

            if dates.insert(url.clone(), lastmod).is_some() {
                debug!(%url, path = %path.display(), "duplicate sitemap url, keeping latest");
            } else {
                stats.included += 1;
            }
        }

        info!(
            scanned = stats.scanned,
            included = stats.included,
            drafts = stats.drafts,
            skipped = stats.missing_frontmatter + stats.invalid_dates,
            "sitemap scan complete"
        );

        (dates, stats)
    }
}

/// Names starting with `_` are private and never published.
fn is_private(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('_')
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Sitemap URL of a markdown file, given its path relative to the blog
/// root.
///
/// The locale is the first path segment that is a locale tag; the slug is
/// the slugified file stem. Category directories are not part of the URL.
/// The result always ends with `/`.
pub fn post_sitemap_url(relative: &Path, base_url: &str) -> Option<String> {
    let locale = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => segment.to_str(),
            _ => None,
        })
        .find_map(Locale::from_tag)
        .unwrap_or(Locale::DEFAULT);

    let stem = relative.file_stem()?.to_string_lossy();
    let slug = slugify(&stem);
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    Some(format!("{base}{}/posts/{slug}/", locale_prefix(locale)))
}
