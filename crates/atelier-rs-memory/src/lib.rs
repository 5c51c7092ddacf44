//! Memory-service client for Atelier.
//!
//! Talks to a MemMachine-style memory store over HTTP: context search before
//! a recommendation, episode ingest after one. Every failure here is designed
//! to be survivable by the caller.

pub mod client;
pub mod error;
pub mod model;
pub mod recall;

/// Memory error type.
pub use error::MemoryError;
/// Wire models for search and ingest payloads.
pub use model::{EpisodeRecord, RetrievedEpisode, SearchRequest, SessionIdentity};
/// Memory store interface and HTTP implementation.
pub use client::{HttpMemoryStore, MemoryStore};
/// Fault-tolerant context retrieval.
pub use recall::{RecallOutcome, format_episodes, recall_context};
