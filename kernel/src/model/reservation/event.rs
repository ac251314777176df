use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;

use crate::model::{
    id::{ReservationId, SpaceId, UserId},
    reservation::{ReservationStatus, TimeSlot},
    role::Role,
};

#[derive(new)]
pub struct CreateReservation {
    pub space_id: SpaceId,
    pub reserved_by: UserId,
    pub booking_date: NaiveDate,
    pub slot: TimeSlot,
    pub attendees: i32,
    pub purpose: String,
    pub requested_at: DateTime<Utc>,
}

#[derive(new)]
pub struct TransitionReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
    pub requested_role: Role,
    pub next_status: ReservationStatus,
    pub cancellation_reason: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(new)]
pub struct CheckInReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
    pub requested_role: Role,
    pub occurred_at: DateTime<Utc>,
}

#[derive(new)]
pub struct CheckOutReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
    pub requested_role: Role,
    pub occurred_at: DateTime<Utc>,
}

#[derive(new)]
pub struct StoreAccessSession {
    pub reservation_id: ReservationId,
    pub session_id: String,
}

#[derive(new)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
}
