//! Keyword sentiment classification.
//!
//! This module handles:
//! - The sentiment label type
//! - Positive and negative keyword sets
//! - The classification function

pub mod keywords;
pub mod types;

pub use keywords::{classify, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
pub use types::Sentiment;
