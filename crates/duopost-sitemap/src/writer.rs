//! Sitemap XML output.

use std::{fs, io::Write, path::Path};

use chrono::SecondsFormat;
use thiserror::Error;
use tracing::{debug, info};

use crate::scanner::SitemapDates;

/// Sitemap output errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Serializes scanned dates as an XML sitemap.
#[derive(Debug, Clone, Default)]
pub struct SitemapWriter {
    stylesheet: Option<String>,
}

impl SitemapWriter {
    /// Create a writer without a stylesheet reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference an XSL stylesheet for browser rendering.
    #[must_use]
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Generate sitemap XML, one `<url>` per entry in URL order.
    pub fn generate(&self, dates: &SitemapDates) -> String {
        debug!(count = dates.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        if let Some(href) = &self.stylesheet {
            xml.push_str(&format!(
                r#"<?xml-stylesheet type="text/xsl" href="{}"?>"#,
                escape_xml(href)
            ));
            xml.push('\n');
        }
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for (loc, lastmod) in dates {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                lastmod.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap XML to a writer.
    pub fn write_to<W: Write>(&self, dates: &SitemapDates, writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(dates).as_bytes())?;
        Ok(())
    }

    /// Write sitemap XML to `path`, creating parent directories.
    pub fn write_file(&self, dates: &SitemapDates, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        self.write_to(dates, &mut file)?;
        info!(path = %path.display(), urls = dates.len(), "wrote sitemap");
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
