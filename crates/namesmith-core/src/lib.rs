//! Core name-generation pipeline.
//!
//! One validated request flows left to right through the pipeline:
//! validate → build prompt → remote completion → extract → sanitize, with a
//! procedural fallback generator standing in whenever the remote side is
//! unavailable, rate limited, filtered, or returns nothing usable. A
//! validated request always settles with a full-count result; the only
//! caller-visible error is [`InvalidRequest`].
//!
//! The pipeline holds no session state and performs no I/O of its own; the
//! remote call goes through the [`namesmith_llm::TextCompletion`] seam.

pub mod error;
pub mod extract;
pub mod fallback;
pub mod pipeline;
pub mod prompt;
pub mod request;
pub mod sanitize;

pub use error::InvalidRequest;
pub use pipeline::{GenerationResult, NameCandidate, NamePipeline, Source};
pub use request::{Choice, GenerationRequest, NameRequest, ALLOWED_VARIANT_COUNTS};
