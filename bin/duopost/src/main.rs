//! duopost CLI
//!
//! Post URLs and sitemap dates for a bilingual markdown blog.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use duopost::cmd::sitemap::SitemapOptions;

/// Command-line interface for duopost.
#[derive(Parser)]
#[command(
    name = "duopost",
    version,
    about = "Post URLs and sitemap dates for a bilingual blog"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "duopost.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Scan posts and write the sitemap
    Sitemap {
        /// Blog source directory (overrides content.blog_dir)
        #[arg(long)]
        blog_dir: Option<std::path::PathBuf>,
        /// Site origin (overrides site.base_url)
        #[arg(long)]
        base_url: Option<String>,
        /// Output file (overrides sitemap.output)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Print the sitemap instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print the URL path of a post
    Url {
        /// Content identifier (e.g., zh/my-post)
        id: String,
        /// Source file path (e.g., src/data/blog/zh/tutorials/my-post.md)
        #[arg(short, long)]
        file: Option<String>,
        /// Omit the /posts base segment
        #[arg(long)]
        no_base: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    duopost::init_tracing(cli.verbose);

    match cli.command {
        Commands::Sitemap {
            blog_dir,
            base_url,
            output,
            stdout,
        } => {
            duopost::cmd::sitemap::run(
                &cli.config,
                SitemapOptions {
                    blog_dir,
                    base_url,
                    output,
                    stdout,
                },
            )?;
        }
        Commands::Url { id, file, no_base } => {
            duopost::cmd::url::run(&id, file.as_deref(), !no_base)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_sitemap_command_parsing() {
        let args = ["duopost", "sitemap", "--output", "dist/sitemap.xml"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("duopost.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Sitemap {
                blog_dir,
                base_url,
                output,
                stdout,
            } => {
                assert!(blog_dir.is_none());
                assert!(base_url.is_none());
                assert_eq!(output, Some(std::path::PathBuf::from("dist/sitemap.xml")));
                assert!(!stdout);
            }
            _ => panic!("Expected Sitemap command"),
        }
    }

    #[test]
    fn test_cli_sitemap_overrides() {
        let args = [
            "duopost",
            "sitemap",
            "--blog-dir",
            "content/blog",
            "--base-url",
            "https://example.com",
            "--stdout",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Sitemap {
                blog_dir,
                base_url,
                stdout,
                ..
            } => {
                assert_eq!(blog_dir, Some(std::path::PathBuf::from("content/blog")));
                assert_eq!(base_url.as_deref(), Some("https://example.com"));
                assert!(stdout);
            }
            _ => panic!("Expected Sitemap command"),
        }
    }

    #[test]
    fn test_cli_stdout_conflicts_with_output() {
        let args = ["duopost", "sitemap", "--stdout", "--output", "x.xml"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_url_command_parsing() {
        let args = [
            "duopost",
            "url",
            "zh/my-post",
            "--file",
            "src/data/blog/zh/tutorials/my-post.md",
            "--no-base",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Url { id, file, no_base } => {
                assert_eq!(id, "zh/my-post");
                assert_eq!(file.as_deref(), Some("src/data/blog/zh/tutorials/my-post.md"));
                assert!(no_base);
            }
            _ => panic!("Expected Url command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["duopost", "-vvv", "url", "en/post"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["duopost", "--config", "site.toml", "sitemap"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
