//! CLI command implementations.

pub mod sitemap;
pub mod url;
