//! # Patlex
//!
//! Hybrid lexical + semantic search for patent documents.
//!
//! ## Features
//!
//! - Pure Rust ranking pipeline
//! - Token-overlap lexical scoring blended with embedding cosine similarity
//! - Pluggable embedding providers (deterministic local fallback or remote API)
//! - HTML-safe snippet highlighting
//! - Structural candidate filtering delegated to a document store seam

pub mod analysis;
pub mod cli;
pub mod document;
pub mod embedding;
pub mod error;
pub mod highlight;
pub mod scoring;
pub mod search;
pub mod vector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
