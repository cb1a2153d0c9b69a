//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionClient` - Upstream RAG completion calls
//! - `ContextSource` - Best-effort live-context page scrape

mod completion_client;
mod context_source;

pub use completion_client::{CompletionClient, CompletionError};
pub use context_source::{ContextFetch, ContextSource};
