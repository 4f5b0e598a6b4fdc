use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),

    #[error("Select a rating before submitting")]
    NoRating,

    #[error("Survey was already submitted")]
    AlreadySubmitted,
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very dissatisfied",
            2 => "Dissatisfied",
            3 => "Neutral",
            4 => "Satisfied",
            _ => "Very satisfied",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.0 {
            1 => "😞",
            2 => "😕",
            3 => "😐",
            4 => "🙂",
            _ => "😍",
        }
    }

    pub fn stars(&self) -> String {
        "⭐".repeat(self.0 as usize)
    }
}

impl TryFrom<u8> for Rating {
    type Error = SurveyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(SurveyError::OutOfRange(value))
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.0 > 1 { "s" } else { "" };
        write!(f, "{} star{}", self.0, plural)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyReceipt {
    pub rating: Rating,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Survey {
    rating: Option<Rating>,
    hover: Option<Rating>,
    receipt: Option<SurveyReceipt>,
}

impl Survey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a rating. Ignored once the survey has been submitted.
    pub fn select(&mut self, rating: Rating) {
        if self.receipt.is_none() {
            self.rating = Some(rating);
        }
    }

    pub fn hover(&mut self, rating: Option<Rating>) {
        self.hover = rating;
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// The hovered rating wins over the selected one for previews.
    pub fn display_rating(&self) -> Option<Rating> {
        self.hover.or(self.rating)
    }

    pub fn can_submit(&self) -> bool {
        self.rating.is_some() && self.receipt.is_none()
    }

    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn receipt(&self) -> Option<&SurveyReceipt> {
        self.receipt.as_ref()
    }

    pub fn submit(&mut self) -> Result<SurveyReceipt, SurveyError> {
        if self.receipt.is_some() {
            return Err(SurveyError::AlreadySubmitted);
        }
        let rating = self.rating.ok_or(SurveyError::NoRating)?;

        let receipt = SurveyReceipt {
            rating,
            submitted_at: Utc::now(),
        };
        self.receipt = Some(receipt.clone());
        Ok(receipt)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
