//! duopost Sitemap Library
//!
//! Sitemap support for duopost.
//!
//! # Modules
//!
//! - [`scanner`] - Last-modified dates from markdown frontmatter
//! - [`writer`] - XML sitemap serialization

pub mod scanner;
pub mod writer;

pub use scanner::{ScanStats, SitemapDates, SitemapScanner, post_sitemap_url};
pub use writer::{SitemapError, SitemapWriter};
