use chrono::{DateTime, Utc};

use kernel::model::{
    id::{RatingId, ReservationId, UserId},
    rating::Rating,
};

#[derive(sqlx::FromRow)]
pub struct RatingRow {
    pub rating_id: RatingId,
    pub rated_user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub score: i32,
    pub comment: Option<String>,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<RatingRow> for Rating {
    fn from(value: RatingRow) -> Self {
        let RatingRow {
            rating_id,
            rated_user_id,
            reservation_id,
            score,
            comment,
            issued_by,
            created_at,
        } = value;
        Rating {
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
