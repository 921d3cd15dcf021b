//! # Sadaa Common Library
//!
//! Shared code for the Sadaa Instrumentals backend:
//! - Entity models and patch/request types
//! - Database schema initialization and shared queries
//! - Error taxonomy
//! - Display-time formatting helper

pub mod db;
pub mod error;
pub mod human_time;

pub use error::{Error, Result};
