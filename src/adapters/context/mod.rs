//! Context adapter - live-context page scraping.

mod page_source;

pub use page_source::PageContextSource;
