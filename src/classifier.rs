//! Threshold classifier mapping the model's sigmoid output to a ternary
//! sentiment label.
//!
//! The model emits a single probability of positive sentiment. Rather than a
//! binary cutoff we carve the range into three buckets so weakly-positive
//! text surfaces as Neutral instead of flapping between extremes.

/// Scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f32 = 0.5;
/// Scores at or above this (but below [`POSITIVE_THRESHOLD`]) are Neutral.
pub const NEUTRAL_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// A label together with the raw score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub score: f32,
}

impl Classification {
    /// The reported confidence: the raw positive-sentiment score rendered
    /// with two decimals. Not re-scaled per class, so a Negative result
    /// carries a low number.
    pub fn confidence(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Maps a positive-sentiment probability to a label.
///
/// Boundary values belong to the higher bucket: exactly 0.5 is Positive,
/// exactly 0.1 is Neutral. The label is decided on the raw score, before
/// any display rounding. Out-of-range inputs are clamped to [0, 1] rather
/// than extrapolating the thresholds.
pub fn classify(score: f32) -> Classification {
    let score = score.clamp(0.0, 1.0);
    let sentiment = if score >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score >= NEUTRAL_THRESHOLD {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    };
    Classification { sentiment, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(score: f32, sentiment: Sentiment, confidence: &str) {
        let c = classify(score);
        assert_eq!(c.sentiment, sentiment, "label for score {score}");
        assert_eq!(c.confidence(), confidence, "confidence for score {score}");
    }

    #[test]
    fn test_positive_boundary() {
        check(0.5, Sentiment::Positive, "0.50");
        check(1.0, Sentiment::Positive, "1.00");
        check(0.73, Sentiment::Positive, "0.73");
    }

    #[test]
    fn test_neutral_boundary() {
        check(0.1, Sentiment::Neutral, "0.10");
        check(0.4999, Sentiment::Neutral, "0.50");
        check(0.25, Sentiment::Neutral, "0.25");
    }

    #[test]
    fn test_negative_boundary() {
        check(0.0999, Sentiment::Negative, "0.10");
        check(0.0, Sentiment::Negative, "0.00");
        check(0.05, Sentiment::Negative, "0.05");
    }

    #[test]
    fn test_label_uses_raw_score_not_rounded() {
        // Display rounds up to "0.50" but the label is decided pre-rounding
        check(0.499999, Sentiment::Neutral, "0.50");
    }

    #[test]
    fn test_out_of_range_scores_clamped() {
        check(1.5, Sentiment::Positive, "1.00");
        check(-0.2, Sentiment::Negative, "0.00");
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::Positive.as_str(), "Positive");
        assert_eq!(Sentiment::Neutral.as_str(), "Neutral");
        assert_eq!(Sentiment::Negative.as_str(), "Negative");
    }
}
