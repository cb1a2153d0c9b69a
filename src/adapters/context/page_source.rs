//! Page Context Source - Implementation of ContextSource over HTTP.
//!
//! Fetches the configured page under a hard timeout, strips it down to plain
//! text, and packs the text into a small number of bounded chunks. Every
//! failure path logs a warning and degrades to [`ContextFetch::Unavailable`]:
//! a broken or slow source must never stall or fail a chat turn.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;

use crate::config::LiveContextConfig;
use crate::domain::turn::LiveContextBlock;
use crate::ports::{ContextFetch, ContextSource};

// Script and style elements are dropped with their content; everything else
// only loses its tags.
static SCRIPT_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("valid script regex"));
static STYLE_BLOCKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").expect("valid style regex"));
static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// HTTP implementation of [`ContextSource`].
pub struct PageContextSource {
    config: LiveContextConfig,
    client: Client,
}

impl PageContextSource {
    /// Creates a new source with the given configuration.
    ///
    /// The client timeout is the configured hard budget; a hung source is
    /// cancelled when it elapses.
    pub fn new(config: LiveContextConfig) -> Self {
        let client = Client::builder()
            .timeout(config.fetch_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(url, %error, "live-context fetch failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "live-context source returned non-2xx");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(error) => {
                tracing::warn!(url, %error, "live-context body read failed");
                None
            }
        }
    }
}

#[async_trait]
impl ContextSource for PageContextSource {
    async fn build_live_context(&self) -> ContextFetch {
        let url = match &self.config.source_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => return ContextFetch::Disabled,
        };

        let Some(html) = self.fetch_page(&url).await else {
            return ContextFetch::Unavailable;
        };

        let text = condense_html(&html);
        let chunked = chunk_words(&text, self.config.max_chunk_chars, self.config.max_chunks);
        if chunked.is_empty() {
            tracing::warn!(url, "live-context page condensed to nothing");
            return ContextFetch::Unavailable;
        }

        ContextFetch::Context(LiveContextBlock {
            source_url: url,
            text: chunked,
        })
    }
}

/// Strips HTML down to collapsed plain text.
fn condense_html(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCKS.replace_all(html, " ");
    let without_styles = STYLE_BLOCKS.replace_all(&without_scripts, " ");
    let without_tags = TAGS.replace_all(&without_styles, " ");
    WHITESPACE.replace_all(&without_tags, " ").trim().to_string()
}

/// Greedily packs whitespace-delimited words into at most `max_chunks` chunks
/// of at most `max_chunk_chars` characters each, joined by a blank line.
fn chunk_words(text: &str, max_chunk_chars: usize, max_chunks: usize) -> String {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.len()
        } else {
            current.len() + 1 + word.len()
        };

        if needed > max_chunk_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            if chunks.len() == max_chunks {
                return chunks.join("\n\n");
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks.truncate(max_chunks);
    chunks.join("\n\n")
}
