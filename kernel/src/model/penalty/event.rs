use derive_new::new;

use crate::model::{
    id::{PenaltyId, ReservationId, UserId},
    penalty::PenaltyStatus,
};

#[derive(new)]
pub struct CreatePenalty {
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub reason: String,
    pub points: i32,
    pub issued_by: UserId,
}

#[derive(new)]
pub struct UpdatePenaltyStatus {
    pub penalty_id: PenaltyId,
    pub status: PenaltyStatus,
}
