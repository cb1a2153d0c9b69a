//! Upstream adapter - RAGFlow completion client.

mod ragflow_client;

pub use ragflow_client::{RagflowClient, RagflowClientConfig};
