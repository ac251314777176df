use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{PenaltyId, ReservationId, UserId},
    penalty::{Penalty, PenaltyStatus},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePenaltyRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub reservation_id: Option<ReservationId>,
    #[garde(length(min = 1))]
    pub reason: String,
    #[garde(range(min = 1, max = 50))]
    pub points: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePenaltyStatusRequest {
    #[garde(skip)]
    pub status: PenaltyStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyResponse {
    pub penalty_id: PenaltyId,
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub reason: String,
    pub points: i32,
    pub status: PenaltyStatus,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl From<Penalty> for PenaltyResponse {
    fn from(value: Penalty) -> Self {
        let Penalty {
            penalty_id,
            user_id,
            reservation_id,
            reason,
            points,
            status,
            issued_by,
            created_at,
        } = value;
        Self {
            penalty_id,
            user_id,
            reservation_id,
            reason,
            points,
            status,
            issued_by,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(points: i32) -> CreatePenaltyRequest {
        CreatePenaltyRequest {
            user_id: UserId::new(),
            reservation_id: None,
            reason: "late check-out".into(),
            points,
        }
    }

    #[test]
    fn points_must_stay_within_range() {
        assert!(request(1).validate(&()).is_ok());
        assert!(request(50).validate(&()).is_ok());
        assert!(request(0).validate(&()).is_err());
        assert!(request(51).validate(&()).is_err());
    }
}
