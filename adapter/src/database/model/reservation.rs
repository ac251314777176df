use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::str::FromStr;

use kernel::model::{
    id::{ReservationId, SpaceId, UserId},
    reservation::{Reservation, ReservationStatus, TimeSlot},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub space_id: SpaceId,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub attendees: i32,
    pub purpose: String,
    pub status: String,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub access_session_id: Option<String>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            user_id,
            space_id,
            booking_date,
            start_time,
            end_time,
            attendees,
            purpose,
            status,
            requested_at,
            approved_by,
            approved_at,
            cancelled_at,
            cancellation_reason,
            check_in_at,
            check_out_at,
            access_session_id,
        } = value;
        let status = ReservationStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("Unknown reservation status: {status}"))
        })?;
        let slot = TimeSlot::new(start_time, end_time).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "Reservation ({reservation_id}) has an invalid time slot"
            ))
        })?;
        Ok(Reservation {
            reservation_id,
            reserved_by: user_id,
            space_id,
            booking_date,
            slot,
            attendees,
            purpose,
            status,
            requested_at,
            approved_by,
            approved_at,
            cancelled_at,
            cancellation_reason,
            check_in_at,
            check_out_at,
            access_session_id,
        })
    }
}

/// Slimmed projection used by the admission check inside the serializable
/// transaction.
#[derive(sqlx::FromRow)]
pub struct BlockingSlotRow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
