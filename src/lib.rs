//! Keyword-based sentiment analysis HTTP API.
//!
//! Classifies text as positive, negative, or neutral by checking for a small
//! set of keywords in the lower-cased input.
//!
//! # Rules
//!
//! ```text
//! contains "good" or "love"  -> positive
//! contains "bad" or "hate"   -> negative
//! otherwise                  -> neutral
//! ```
//!
//! The positive check runs first, so "I love but hate this" is positive.
//!
//! # Modules
//!
//! - [`classifier`]: Sentiment labels and keyword matching
//! - [`api`]: HTTP API (root, health, sentiment, docs, metrics)
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Classification counters and latency
//! - [`utils`]: Utility functions

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use classifier::{classify, Sentiment};
pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
