//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `upstream` - RAGFlow completion client (reqwest)
//! - `context` - Live-context page scraping (reqwest)
//! - `http` - Inbound REST API (axum)

pub mod context;
pub mod http;
pub mod upstream;

pub use context::PageContextSource;
pub use upstream::{RagflowClient, RagflowClientConfig};
