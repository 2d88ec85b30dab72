//! Sitemap command - scans posts and writes the sitemap

use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use duopost_core::Config;
use duopost_sitemap::{SitemapScanner, SitemapWriter};

/// Command-line overrides for the sitemap command.
#[derive(Debug, Default, Clone)]
pub struct SitemapOptions {
    /// Blog source directory.
    pub blog_dir: Option<PathBuf>,
    /// Site origin.
    pub base_url: Option<String>,
    /// Output file.
    pub output: Option<PathBuf>,
    /// Print to stdout instead of writing a file.
    pub stdout: bool,
}

/// Resolve the effective configuration.
///
/// The config file may be absent when both the blog directory and the base
/// URL are given on the command line.
pub fn resolve_config(config_path: &Path, options: &SitemapOptions) -> Result<Config> {
    let mut config = match (&options.blog_dir, &options.base_url) {
        (Some(_), Some(base_url)) if !config_path.exists() => {
            tracing::info!("No configuration file, using command-line settings");
            Config::with_base_url(base_url.clone())
        }
        _ => Config::load_with_env(config_path).wrap_err("Failed to load configuration")?,
    };

    if let Some(dir) = &options.blog_dir {
        tracing::info!(blog_dir = %dir.display(), "Overriding blog directory from CLI");
        config.content.blog_dir = dir.clone();
    }

    if let Some(url) = &options.base_url {
        tracing::info!(base_url = %url, "Overriding base URL from CLI");
        config.site.base_url = url.clone();
    }

    if let Some(output) = &options.output {
        config.sitemap.output = output.clone();
    }

    config.validate().wrap_err("Invalid configuration")?;
    Ok(config)
}

/// Run the sitemap command.
pub fn run(config_path: &Path, options: SitemapOptions) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting sitemap generation");

    let config = resolve_config(config_path, &options)?;
    tracing::debug!(?config, "Loaded configuration");

    let scanner = SitemapScanner::new(&config.content.blog_dir);
    let (dates, stats) = scanner.scan_with_stats(config.base_url());
    let writer = match &config.sitemap.stylesheet {
        Some(href) => SitemapWriter::new().with_stylesheet(href.clone()),
        None => SitemapWriter::new(),
    };

    if options.stdout {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        writer
            .write_to(&dates, &mut lock)
            .wrap_err("Failed to write sitemap to stdout")?;
        lock.flush()?;
        return Ok(());
    }

    writer
        .write_file(&dates, &config.sitemap.output)
        .wrap_err_with(|| {
            format!(
                "Failed to write sitemap to {}",
                config.sitemap.output.display()
            )
        })?;

    let duration = start.elapsed();

    println!();
    println!("  Sitemap generated!");
    println!();
    println!("  Scanned:    {}", stats.scanned);
    println!("  URLs:       {}", dates.len());
    println!("  Drafts:     {}", stats.drafts);
    println!(
        "  Skipped:    {}",
        stats.missing_frontmatter + stats.invalid_dates + stats.unreadable
    );
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", config.sitemap.output.display());
    println!();

    tracing::info!(?stats, ?duration, "Sitemap generation completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_resolve_config_without_file() {
        let options = SitemapOptions {
            blog_dir: Some(PathBuf::from("posts")),
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };

        let config = resolve_config(Path::new("/nonexistent/duopost.toml"), &options)
            .expect("resolve config");

        assert_eq!(config.content.blog_dir, PathBuf::from("posts"));
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn test_resolve_config_requires_file_or_overrides() {
        let options = SitemapOptions {
            base_url: Some("https://example.com".to_string()),
            ..Default::default()
        };

        assert!(resolve_config(Path::new("/nonexistent/duopost.toml"), &options).is_err());
    }

    #[test]
    fn test_run_writes_sitemap() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blog = dir.path().join("blog");
        fs::create_dir_all(blog.join("zh")).expect("create dirs");
        fs::write(
            blog.join("zh/hello.md"),
            "---\npubDatetime: 2024-01-14\n---\n",
        )
        .expect("write post");

        let output = dir.path().join("out/sitemap.xml");
        let options = SitemapOptions {
            blog_dir: Some(blog),
            base_url: Some("https://example.com".to_string()),
            output: Some(output.clone()),
            stdout: false,
        };

        run(&dir.path().join("duopost.toml"), options).expect("run sitemap");

        let xml = fs::read_to_string(output).expect("read sitemap");
        assert!(xml.contains("<loc>https://example.com/zh/posts/hello/</loc>"));
        assert!(!xml.contains("xml-stylesheet"));
    }

    #[test]
    fn test_run_uses_configured_stylesheet() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let blog = dir.path().join("blog");
        fs::create_dir_all(blog.join("en")).expect("create dirs");
        fs::write(
            blog.join("en/hello.md"),
            "---\npubDatetime: 2024-01-14\n---\n",
        )
        .expect("write post");

        let output = dir.path().join("sitemap.xml");
        let config_path = dir.path().join("duopost.toml");
        fs::write(
            &config_path,
            format!(
                "[site]\nbase_url = \"https://example.com\"\n\n[content]\nblog_dir = {:?}\n\n[sitemap]\noutput = {:?}\nstylesheet = \"/sitemap.xsl\"\n",
                blog.display().to_string(),
                output.display().to_string()
            ),
        )
        .expect("write config");

        run(&config_path, SitemapOptions::default()).expect("run sitemap");

        let xml = fs::read_to_string(output).expect("read sitemap");
        assert!(xml.contains(r#"<?xml-stylesheet type="text/xsl" href="/sitemap.xsl"?>"#));
        assert!(xml.contains("<loc>https://example.com/posts/hello/</loc>"));
    }
}
