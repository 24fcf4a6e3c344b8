pub mod changelog;
pub mod config;
pub mod filesystem;
pub mod merger;
pub mod prepend;
