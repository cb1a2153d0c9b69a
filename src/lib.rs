//! SDG Chat Gateway - RAG chat proxy for the SDG knowledge widget.
//!
//! This crate fronts a RAGFlow-style completion service with a single chat
//! endpoint: it normalizes the upstream's several response encodings into one
//! shape, manages the session-initialization handshake, optionally augments
//! questions with freshly scraped page context, and polishes answers into
//! short widget-friendly text.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
