//! Url command - prints the canonical path of a post

use color_eyre::eyre::{Result, bail};
use duopost_core::{build_path, resolve_locale, resolve_slug};

/// Run the url command.
///
/// Prints the URL path built from a content identifier and, optionally, its
/// source file path.
pub fn run(id: &str, file: Option<&str>, include_base: bool) -> Result<()> {
    if id.trim().is_empty() {
        bail!("Content identifier cannot be empty");
    }

    tracing::debug!(
        id,
        locale = %resolve_locale(id),
        slug = resolve_slug(id),
        ?file,
        "Building post path"
    );

    println!("{}", build_path(id, file, include_base));

    Ok(())
}
