pub mod preview;
pub mod profile;
pub mod result;
pub mod slide;
