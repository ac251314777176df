use derive_new::new;

use crate::model::id::{ReservationId, UserId};

#[derive(new)]
pub struct CreateRating {
    pub rated_user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub score: i32,
    pub comment: Option<String>,
    pub issued_by: UserId,
}
