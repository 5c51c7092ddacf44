//! Core orchestration for Atelier.
//!
//! Owns the request model, prompt assembly, the word-list fallback generator,
//! and the `Stylist` orchestrator that runs the linear
//! validate → recall → compose → complete → log flow.

pub mod error;
pub mod fallback;
pub mod prompt;
pub mod request;
pub mod stylist;

/// Orchestration error type.
pub use error::StylistError;
/// Offline word-list generator.
pub use fallback::offline_outfit;
/// Prompt assembly.
pub use prompt::{ComposedPrompt, compose};
/// Request and response models.
pub use request::{OutfitRequest, OutfitResult};
/// The request orchestrator.
pub use stylist::Stylist;
