//! DataScout Agent library.
//!
//! This crate provides the NL-to-SQL console as a library, allowing it to be
//! tested and reused by the integration-tests crate.
//!
//! # Pipeline
//!
//! One user action runs one pipeline pass: the question is interpolated into
//! a static prompt, sent to the `OpenAI` chat-completions API, and the reply
//! is executed verbatim as SQL against the demo database. Either a result
//! table or the caught error text is rendered; nothing is retried, validated,
//! or cached.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod exec;
pub mod openai;
pub mod routes;
pub mod state;
