//! Thin Ollama client used to draft issue-fix suggestions.
//!
//! One endpoint is consumed: `POST {endpoint}/api/generate` with
//! `stream=false`. The caller treats every failure here as degradable —
//! a broken inference service must never abort the enclosing request.

pub mod config;
mod ollama;
pub mod prompt;

pub use config::SuggestConfig;
pub use ollama::{OllamaService, SuggestError};
