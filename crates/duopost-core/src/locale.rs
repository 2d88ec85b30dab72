//! Locale resolution for content identifiers.
//!
//! Content identifiers look like `zh/oh-my-opencode-part-1`: an optional
//! locale tag followed by the post slug. Anything without a known tag in
//! the first segment belongs to the default locale, which is served
//! without a URL prefix.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{content::ContentEntry, i18n};

/// Supported site locales.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default locale.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// The unprefixed locale.
    pub const DEFAULT: Locale = Locale::En;

    /// Match a tag exactly (`"en"`, `"zh"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// The locale tag as used in identifiers and URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Whether this is the default locale.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Whether `segment` is one of the locale tags.
    pub fn is_tag(segment: &str) -> bool {
        Self::from_tag(segment).is_some()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale tag: {0:?}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

fn first_segment(id: &str) -> &str {
    id.split('/').next().unwrap_or(id)
}

/// Resolve the locale of a content identifier.
///
/// Falls back to [`Locale::DEFAULT`] when the first segment is not a tag.
pub fn resolve_locale(id: &str) -> Locale {
    Locale::from_tag(first_segment(id)).unwrap_or(Locale::DEFAULT)
}

/// Strip the locale segment from a content identifier.
///
/// `"zh/oh-my-opencode-part-1"` becomes `"oh-my-opencode-part-1"`;
/// identifiers without a locale segment are returned unchanged.
pub fn resolve_slug(id: &str) -> &str {
    let first = first_segment(id);
    if Locale::is_tag(first) {
        id.get(first.len() + 1..).unwrap_or("")
    } else {
        id
    }
}

/// URL prefix for a locale: empty for the default, `/{tag}` otherwise.
pub fn locale_prefix(locale: Locale) -> String {
    if locale.is_default() {
        String::new()
    } else {
        format!("/{locale}")
    }
}

/// Route of a post page, e.g. `/zh/posts/hello`.
pub fn post_url(locale: Locale, slug: &str) -> String {
    format!("{}/posts/{slug}", locale_prefix(locale))
}

/// Short label shown in the language switcher.
pub fn lang_label(locale: Locale) -> &'static str {
    i18n::t(locale).lang_label
}

/// Full language name.
pub fn lang_name(locale: Locale) -> &'static str {
    i18n::t(locale).lang_name
}

/// Keep only the entries whose identifier resolves to `locale`.
///
/// Input order is preserved.
pub fn filter_by_locale<T: ContentEntry>(posts: &[T], locale: Locale) -> Vec<&T> {
    posts
        .iter()
        .filter(|post| resolve_locale(post.id()) == locale)
        .collect()
}
