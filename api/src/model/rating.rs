use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{RatingId, ReservationId, UserId},
    rating::Rating,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    #[garde(skip)]
    pub rated_user_id: UserId,
    #[garde(skip)]
    pub reservation_id: Option<ReservationId>,
    #[garde(range(min = 1, max = 5))]
    pub score: i32,
    #[garde(skip)]
    pub comment: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub rating_id: RatingId,
    pub rated_user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub score: i32,
    pub comment: Option<String>,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Rating> for RatingResponse {
    fn from(value: Rating) -> Self {
        let Rating {
            rating_id,
            rated_user_id,
            reservation_id,
            score,
            comment,
            issued_by,
            created_at,
        } = value;
        Self {
            rating_id,
            rated_user_id,
            reservation_id,
            score,
            comment,
            issued_by,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(score: i32) -> CreateRatingRequest {
        CreateRatingRequest {
            rated_user_id: UserId::new(),
            reservation_id: None,
            score,
            comment: None,
        }
    }

    #[test]
    fn score_must_stay_within_range() {
        assert!(request(1).validate(&()).is_ok());
        assert!(request(5).validate(&()).is_ok());
        assert!(request(0).validate(&()).is_err());
        assert!(request(6).validate(&()).is_err());
    }
}
