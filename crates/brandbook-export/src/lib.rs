//! brandbook-export
//!
//! Result presentation: the form page and preview panel rendered from Tera
//! templates, and the PDF download of a generation result.

pub mod error;
pub mod pdf;
pub mod render;
