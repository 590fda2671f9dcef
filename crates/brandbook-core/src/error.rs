use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("slide not found: {0}")]
    SlideNotFound(Uuid),

    #[error("duplicate slide id: {0}")]
    DuplicateSlideId(Uuid),

    #[error("invalid tone: {0}")]
    InvalidTone(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("image too large: {size} bytes (limit {limit})")]
    ImageTooLarge { size: usize, limit: usize },

    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
