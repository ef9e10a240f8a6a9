//! Keyword matching.

use super::types::Sentiment;

/// Keywords that mark text as positive.
pub const POSITIVE_KEYWORDS: [&str; 2] = ["good", "love"];

/// Keywords that mark text as negative.
pub const NEGATIVE_KEYWORDS: [&str; 2] = ["bad", "hate"];

/// Classify text by case-insensitive substring match.
///
/// Positive keywords are checked first, so text containing both a positive
/// and a negative keyword is [`Sentiment::Positive`].
///
/// ```
/// use sentiment_api::classifier::{classify, Sentiment};
///
/// assert_eq!(classify("I love but hate this"), Sentiment::Positive);
/// assert_eq!(classify("BAD day"), Sentiment::Negative);
/// assert_eq!(classify(""), Sentiment::Neutral);
/// ```
pub fn classify(text: &str) -> Sentiment {
    let text = text.to_lowercase();

    if contains_any(&text, &POSITIVE_KEYWORDS) {
        Sentiment::Positive
    } else if contains_any(&text, &NEGATIVE_KEYWORDS) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
