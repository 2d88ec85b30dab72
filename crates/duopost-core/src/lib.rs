//! duopost Core Library
//!
//! Locale resolution, post URL paths, UI strings and frontmatter dates for a
//! bilingual (English/Chinese) markdown blog.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod i18n;
pub mod locale;
pub mod path;

pub use config::Config;
pub use content::{BlogEntry, ContentEntry};
pub use error::{CoreError, Result};
pub use frontmatter::{PostMeta, extract_frontmatter, parse_datetime};
pub use i18n::{UiStrings, t};
pub use locale::{
    Locale, filter_by_locale, lang_label, lang_name, locale_prefix, post_url, resolve_locale,
    resolve_slug,
};
pub use path::{BLOG_PATH, build_path, slugify};
