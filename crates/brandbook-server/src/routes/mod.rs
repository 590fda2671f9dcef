pub mod download;
pub mod generate;
pub mod health;
pub mod logo;
pub mod page;
pub mod profile;
pub mod slides;
