use chrono::{DateTime, Utc};
use std::str::FromStr;

use kernel::model::{
    id::{PenaltyId, ReservationId, UserId},
    penalty::{Penalty, PenaltyStatus},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct PenaltyRow {
    pub penalty_id: PenaltyId,
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub reason: String,
    pub points: i32,
    pub status: String,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PenaltyRow> for Penalty {
    type Error = AppError;

    fn try_from(value: PenaltyRow) -> Result<Self, Self::Error> {
        let PenaltyRow {
            penalty_id,
            user_id,
            reservation_id,
            reason,
            points,
            status,
            issued_by,
            created_at,
        } = value;
        let status = PenaltyStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("Unknown penalty status: {status}"))
        })?;
        Ok(Penalty {
            penalty_id,
            user_id,
            reservation_id,
            reason,
            points,
            status,
            issued_by,
            created_at,
        })
    }
}
