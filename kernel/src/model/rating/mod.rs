use chrono::{DateTime, Utc};

use crate::model::{
    id::{RatingId, ReservationId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use shared::error::{AppError, AppResult};

pub mod event;

#[derive(Debug)]
pub struct Rating {
    pub rating_id: RatingId,
    pub rated_user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub score: i32,
    pub comment: Option<String>,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

/// Guards for tying a rating to a reservation, evaluated in a fixed order:
/// ownership, completion, uniqueness. The first failing guard decides the
/// reported error.
pub fn validate_rating_target(
    reservation: &Reservation,
    rated_user_id: UserId,
    already_rated: bool,
) -> AppResult<()> {
    if !reservation.is_owned_by(rated_user_id) {
        return Err(AppError::UnprocessableEntity(format!(
            "Reservation ({}) does not belong to the rated user.",
            reservation.reservation_id
        )));
    }
    if reservation.status != ReservationStatus::Completed {
        return Err(AppError::UnprocessableEntity(format!(
            "Reservation ({}) is not completed and cannot be rated.",
            reservation.reservation_id
        )));
    }
    if already_rated {
        return Err(AppError::DuplicateRating(format!(
            "Reservation ({}) already has a rating.",
            reservation.reservation_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{id::SpaceId, reservation::TimeSlot};
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn completed_reservation(owner: UserId) -> Reservation {
        let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        Reservation {
            reservation_id: ReservationId::new(),
            reserved_by: owner,
            space_id: SpaceId::new(),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            slot: TimeSlot::new(start, end).unwrap(),
            attendees: 2,
            purpose: "exam prep".into(),
            status: ReservationStatus::Completed,
            requested_at: Utc::now(),
            approved_by: None,
            approved_at: None,
            cancelled_at: None,
            cancellation_reason: None,
            check_in_at: Some(Utc::now()),
            check_out_at: Some(Utc::now()),
            access_session_id: None,
        }
    }

    #[test]
    fn completed_owned_unrated_reservation_is_ratable() {
        let owner = UserId::new();
        let reservation = completed_reservation(owner);
        assert!(validate_rating_target(&reservation, owner, false).is_ok());
    }

    #[test]
    fn ownership_guard_fires_first() {
        let reservation = completed_reservation(UserId::new());
        // Wrong user and already rated: the ownership error must win.
        let res = validate_rating_target(&reservation, UserId::new(), true);
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn non_completed_reservation_cannot_be_rated() {
        let owner = UserId::new();
        let mut reservation = completed_reservation(owner);
        reservation.status = ReservationStatus::Approved;
        let res = validate_rating_target(&reservation, owner, false);
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }

    #[test]
    fn second_rating_is_a_duplicate() {
        let owner = UserId::new();
        let reservation = completed_reservation(owner);
        let res = validate_rating_target(&reservation, owner, true);
        assert!(matches!(res, Err(AppError::DuplicateRating(_))));
    }
}
