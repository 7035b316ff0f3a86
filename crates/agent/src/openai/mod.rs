//! `OpenAI` API client for the NL-to-SQL translation call.
//!
//! The boundary operation of the pipeline: a free-text question goes in, a
//! string claimed to be SQL comes out. No validation or schema grounding is
//! applied to the reply; callers pass it to the execution engine as-is.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenAiClient;
pub use error::OpenAiError;
