//! # Lyrical Common Library
//!
//! Shared code for the Lyrical services including:
//! - Entity store (SQLite) initialization and operations
//! - Song/Lyric models
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
