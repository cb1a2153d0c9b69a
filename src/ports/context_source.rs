//! Context Source Port - Interface to the live-context page scrape.
//!
//! Live context is strictly best-effort: a hung or broken source must never
//! fail a chat turn. The outcome type makes the recovered-failure case a
//! distinct value instead of a swallowed error, so callers cannot mistake
//! "we had nothing" for "here is something".

use async_trait::async_trait;

use crate::domain::turn::LiveContextBlock;

/// Outcome of a live-context fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ContextFetch {
    /// Usable context was retrieved within the time budget.
    Context(LiveContextBlock),
    /// No source URL is configured; the feature is off.
    Disabled,
    /// The fetch failed or produced nothing; already logged, fully recovered.
    Unavailable,
}

impl ContextFetch {
    /// The fetched block, if any.
    pub fn into_block(self) -> Option<LiveContextBlock> {
        match self {
            Self::Context(block) => Some(block),
            Self::Disabled | Self::Unavailable => None,
        }
    }
}

/// Port for retrieving a bounded amount of fresh external context.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Fetches and condenses live context within a hard time budget.
    ///
    /// Never fails: every error path degrades to [`ContextFetch::Unavailable`].
    async fn build_live_context(&self) -> ContextFetch;
}
