//! brandbook-gemini
//!
//! Prompt construction, response schema, and Gemini model invocation with
//! structured output parsing.

pub mod client;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod schema;
