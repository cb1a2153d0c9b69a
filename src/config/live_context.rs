//! Live-context fetch configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Live-context augmentation configuration.
///
/// The feature is off unless `source_url` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveContextConfig {
    /// Page to scrape for fresh context; absent disables the feature
    pub source_url: Option<String>,

    /// Hard fetch timeout in milliseconds
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Maximum characters per retained chunk
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Maximum number of retained chunks
    #[serde(default = "default_max_chunks")]
    pub max_chunks: usize,
}

impl LiveContextConfig {
    /// Whether a source URL is configured.
    pub fn is_enabled(&self) -> bool {
        self.source_url.as_ref().is_some_and(|url| !url.is_empty())
    }

    /// Get the fetch timeout as Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Validate live-context configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.source_url {
            if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidLiveContextUrl);
            }
        }
        if self.fetch_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_chunk_chars == 0 || self.max_chunks == 0 {
            return Err(ValidationError::InvalidChunking);
        }
        Ok(())
    }
}

impl Default for LiveContextConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            fetch_timeout_ms: default_fetch_timeout_ms(),
            max_chunk_chars: default_max_chunk_chars(),
            max_chunks: default_max_chunks(),
        }
    }
}

fn default_fetch_timeout_ms() -> u64 {
    4000
}

fn default_max_chunk_chars() -> usize {
    600
}

fn default_max_chunks() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LiveContextConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.fetch_timeout(), Duration::from_millis(4000));
        assert_eq!(config.max_chunk_chars, 600);
        assert_eq!(config.max_chunks, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_with_url() {
        let config = LiveContextConfig {
            source_url: Some("https://example.org/news".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_url_means_disabled() {
        let config = LiveContextConfig {
            source_url: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = LiveContextConfig {
            source_url: Some("ftp://example.org".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLiveContextUrl)
        ));
    }

    #[test]
    fn test_validation_rejects_zero_bounds() {
        let config = LiveContextConfig {
            fetch_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = LiveContextConfig {
            max_chunks: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidChunking)
        ));
    }
}
