use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::a001_tour_package::TourPackageId;

pub const MIN_COMMENT_LEN: usize = 10;
pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Review must be at least {min} characters")]
    CommentTooShort { min: usize },

    #[error("Review must be at most {max} characters")]
    CommentTooLong { max: usize },

    #[error("Please enter your name")]
    MissingAuthor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub package_id: TourPackageId,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/packages/{id}/reviews`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub package_id: TourPackageId,
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ReviewError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ReviewError::RatingOutOfRange(self.rating));
        }
        if self.author.trim().is_empty() {
            return Err(ReviewError::MissingAuthor);
        }
        let len = self.comment.trim().chars().count();
        if len < MIN_COMMENT_LEN {
            return Err(ReviewError::CommentTooShort { min: MIN_COMMENT_LEN });
        }
        if len > MAX_COMMENT_LEN {
            return Err(ReviewError::CommentTooLong { max: MAX_COMMENT_LEN });
        }
        Ok(())
    }
}

/// Mean rating rounded to one decimal, `None` for no reviews
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
