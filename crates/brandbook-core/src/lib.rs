//! brandbook-core
//!
//! Pure domain types for company profile generation: the profile request
//! and its slides, the generation result, the form state controller, logo
//! ingestion, and the submission session. No network dependency; this is
//! the shared vocabulary of the Brandbook system.

pub mod error;
pub mod form;
pub mod logo;
pub mod models;
pub mod session;
