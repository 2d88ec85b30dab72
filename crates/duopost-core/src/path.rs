//! Canonical post URL paths.

use crate::locale::{self, Locale};

/// Blog source root, relative to the project root.
pub const BLOG_PATH: &str = "src/data/blog";

/// Punctuation that survives [`slugify`] besides alphanumerics and `_`.
const SLUG_PUNCTUATION: &str = "*+~.()'\"!:@";

/// Symbols spelled out as words instead of being dropped.
fn symbol_word(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("and"),
        '$' => Some("dollar"),
        '%' => Some("percent"),
        '<' => Some("less"),
        '>' => Some("greater"),
        '|' => Some("or"),
        _ => None,
    }
}

/// Convert text to a URL-safe slug.
///
/// Trims, lowercases and collapses runs of whitespace and `-` into a single
/// `-`. A few symbols are spelled out (`&` becomes `and`); characters other
/// than alphanumerics, `_` and a small set of URL-safe punctuation are
/// dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
            continue;
        }

        let word = symbol_word(ch);
        if word.is_none()
            && !(ch.is_alphanumeric() || ch == '_' || SLUG_PUNCTUATION.contains(ch))
        {
            continue;
        }

        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;

        match word {
            Some(word) => slug.push_str(word),
            None => slug.extend(ch.to_lowercase()),
        }
    }

    slug
}

/// Category directories between the blog root and the file.
///
/// Private (`_`-prefixed) and locale directories are skipped; the file
/// name itself is dropped.
fn category_segments(file_path: &str) -> Vec<String> {
    let normalized = file_path.replace('\\', "/");
    let relative = normalized.replacen(BLOG_PATH, "", 1);

    let mut segments: Vec<&str> = relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !segment.starts_with('_'))
        .filter(|segment| !Locale::is_tag(segment))
        .collect();
    segments.pop();

    segments
        .into_iter()
        .map(slugify)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Build the URL path of a post.
///
/// The locale comes from `id`, the final segment of `id` is the slug and
/// nested directories under the blog root become category segments:
///
/// - `("zh/my-post", Some("src/data/blog/zh/tutorials/my-post.md"))` →
///   `/zh/posts/tutorials/my-post`
/// - `("en/my-post", None)` → `/posts/my-post`
///
/// With `include_base` false the `/posts` segment is omitted.
pub fn build_path(id: &str, file_path: Option<&str>, include_base: bool) -> String {
    let prefix = locale::locale_prefix(locale::resolve_locale(id));
    let base = if include_base { "/posts" } else { "" };
    let slug = id.rsplit('/').next().unwrap_or(id);

    let segments = file_path.map(category_segments).unwrap_or_default();

    if segments.is_empty() {
        format!("{prefix}{base}/{slug}")
    } else {
        format!("{prefix}{base}/{}/{slug}", segments.join("/"))
    }
}
