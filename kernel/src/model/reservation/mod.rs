use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::{
    id::{ReservationId, SpaceId, UserId},
    role::Role,
};
use shared::error::{AppError, AppResult};

pub mod event;

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub space_id: SpaceId,
    pub booking_date: NaiveDate,
    pub slot: TimeSlot,
    pub attendees: i32,
    pub purpose: String,
    pub status: ReservationStatus,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub check_in_at: Option<DateTime<Utc>>,
    pub check_out_at: Option<DateTime<Utc>>,
    pub access_session_id: Option<String>,
}

impl Reservation {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.reserved_by == user_id
    }

    /// Guard for check-in: only an approved reservation that has not been
    /// checked in yet.
    pub fn ensure_can_check_in(&self) -> AppResult<()> {
        if self.status != ReservationStatus::Approved {
            return Err(AppError::InvalidTransition(format!(
                "Reservation ({}) is not approved and cannot be checked in.",
                self.reservation_id
            )));
        }
        if self.check_in_at.is_some() {
            return Err(AppError::InvalidTransition(format!(
                "Reservation ({}) is already checked in.",
                self.reservation_id
            )));
        }
        Ok(())
    }

    /// Guard for check-out: the reservation must still be approved, a prior
    /// check-in must exist and no prior check-out.
    pub fn ensure_can_check_out(&self) -> AppResult<()> {
        if self.status != ReservationStatus::Approved {
            return Err(AppError::InvalidTransition(format!(
                "Reservation ({}) is not approved and cannot be checked out.",
                self.reservation_id
            )));
        }
        if self.check_in_at.is_none() {
            return Err(AppError::InvalidTransition(format!(
                "Reservation ({}) must be checked in before checking out.",
                self.reservation_id
            )));
        }
        if self.check_out_at.is_some() {
            return Err(AppError::InvalidTransition(format!(
                "Reservation ({}) is already checked out.",
                self.reservation_id
            )));
        }
        Ok(())
    }
}

/// Half-open civil-time interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::UnprocessableEntity(
                "End time must be after start time.".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Standard half-open overlap. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, Serialize, Deserialize, Default,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
    NoShow,
}

impl ReservationStatus {
    /// No transition is defined out of a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Rejected
                | ReservationStatus::Cancelled
                | ReservationStatus::Completed
                | ReservationStatus::NoShow
        )
    }

}

/// Validates a requested status transition against the state machine and the
/// actor's privileges. `completed` is reachable only through check-out, never
/// through a direct transition request.
pub fn validate_transition(
    current: ReservationStatus,
    next: ReservationStatus,
    actor_role: Role,
    is_owner: bool,
) -> AppResult<()> {
    use ReservationStatus::*;

    if !actor_role.is_admin() && !is_owner {
        return Err(AppError::ForbiddenOperation);
    }

    let requires_admin = match (current, next) {
        (Pending, Approved) | (Pending, Rejected) => true,
        (Pending, Cancelled) => false,
        (Approved, Cancelled) | (Approved, NoShow) => true,
        _ => {
            return Err(AppError::InvalidTransition(format!(
                "Transition from {} to {} is not allowed.",
                current.as_ref(),
                next.as_ref()
            )))
        }
    };

    if requires_admin && !actor_role.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
    }

    #[test]
    fn slot_rejects_inverted_or_empty_interval() {
        assert!(TimeSlot::new(t(10, 0), t(9, 0)).is_err());
        assert!(TimeSlot::new(t(10, 0), t(10, 0)).is_err());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = slot((10, 0), (12, 0));
        let b = slot((10, 30), (11, 30));
        let c = slot((13, 0), (14, 0));
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let morning = slot((9, 0), (10, 0));
        let next = slot((10, 0), (11, 0));
        assert!(!morning.overlaps(&next));
        assert!(!next.overlaps(&morning));
    }

    #[test]
    fn containment_and_partial_overlap_conflict() {
        let outer = slot((9, 0), (17, 0));
        let inner = slot((10, 0), (11, 0));
        let straddling = slot((16, 30), (18, 0));
        assert!(outer.overlaps(&inner));
        assert!(outer.overlaps(&straddling));
    }

    #[test]
    fn duration_is_reported_in_minutes() {
        assert_eq!(slot((10, 0), (12, 0)).duration_minutes(), 120);
        assert_eq!(slot((9, 15), (9, 45)).duration_minutes(), 30);
    }

    #[test]
    fn no_transition_leaves_a_terminal_status() {
        use ReservationStatus::*;
        for terminal in [Rejected, Cancelled, Completed, NoShow] {
            assert!(terminal.is_terminal());
            for next in [Pending, Approved, Rejected, Cancelled, Completed, NoShow] {
                let res = validate_transition(terminal, next, Role::Admin, true);
                assert!(
                    matches!(res, Err(AppError::InvalidTransition(_))),
                    "{terminal:?} -> {next:?} must be rejected"
                );
            }
        }
    }

    #[test]
    fn admin_approves_and_rejects_pending() {
        use ReservationStatus::*;
        assert!(validate_transition(Pending, Approved, Role::Admin, false).is_ok());
        assert!(validate_transition(Pending, Rejected, Role::Admin, false).is_ok());
    }

    #[test]
    fn owner_cannot_approve_own_reservation() {
        use ReservationStatus::*;
        let res = validate_transition(Pending, Approved, Role::User, true);
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[test]
    fn owner_cancels_pending_but_not_approved() {
        use ReservationStatus::*;
        assert!(validate_transition(Pending, Cancelled, Role::User, true).is_ok());
        let res = validate_transition(Approved, Cancelled, Role::User, true);
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[test]
    fn stranger_is_forbidden_before_anything_else() {
        use ReservationStatus::*;
        let res = validate_transition(Completed, Cancelled, Role::User, false);
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }

    #[test]
    fn admin_cancels_approved_and_marks_no_show() {
        use ReservationStatus::*;
        assert!(validate_transition(Approved, Cancelled, Role::Admin, false).is_ok());
        assert!(validate_transition(Approved, NoShow, Role::Admin, false).is_ok());
    }

    #[test]
    fn completed_is_not_reachable_by_direct_transition() {
        use ReservationStatus::*;
        for current in [Pending, Approved] {
            let res = validate_transition(current, Completed, Role::Admin, false);
            assert!(matches!(res, Err(AppError::InvalidTransition(_))));
        }
    }

    fn sample_reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            reserved_by: UserId::new(),
            space_id: SpaceId::new(),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            slot: slot((10, 0), (12, 0)),
            attendees: 4,
            purpose: "group study".into(),
            status,
            requested_at: Utc::now(),
            approved_by: None,
            approved_at: None,
            cancelled_at: None,
            cancellation_reason: None,
            check_in_at: None,
            check_out_at: None,
            access_session_id: None,
        }
    }

    #[test]
    fn full_lifecycle_reaches_completed_with_ordered_timestamps() {
        let mut reservation = sample_reservation(ReservationStatus::Pending);

        validate_transition(
            reservation.status,
            ReservationStatus::Approved,
            Role::Admin,
            false,
        )
        .unwrap();
        reservation.status = ReservationStatus::Approved;
        reservation.approved_at = Some(Utc::now());

        reservation.ensure_can_check_in().unwrap();
        reservation.check_in_at = Some(Utc::now());

        reservation.ensure_can_check_out().unwrap();
        reservation.check_out_at =
            Some(reservation.check_in_at.unwrap() + chrono::Duration::minutes(90));
        reservation.status = ReservationStatus::Completed;

        assert!(reservation.status.is_terminal());
        assert!(reservation.check_out_at > reservation.check_in_at);
    }

    #[test]
    fn check_in_requires_approved_status() {
        let pending = sample_reservation(ReservationStatus::Pending);
        assert!(matches!(
            pending.ensure_can_check_in(),
            Err(AppError::InvalidTransition(_))
        ));

        let approved = sample_reservation(ReservationStatus::Approved);
        assert!(approved.ensure_can_check_in().is_ok());
    }

    #[test]
    fn double_check_in_is_rejected() {
        let mut reservation = sample_reservation(ReservationStatus::Approved);
        reservation.check_in_at = Some(Utc::now());
        assert!(matches!(
            reservation.ensure_can_check_in(),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn check_out_requires_prior_check_in() {
        let reservation = sample_reservation(ReservationStatus::Approved);
        assert!(matches!(
            reservation.ensure_can_check_out(),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn cancelled_reservation_cannot_be_checked_out() {
        let mut reservation = sample_reservation(ReservationStatus::Cancelled);
        reservation.check_in_at = Some(Utc::now());
        assert!(matches!(
            reservation.ensure_can_check_out(),
            Err(AppError::InvalidTransition(_))
        ));
    }

    #[test]
    fn double_check_out_is_rejected() {
        let mut reservation = sample_reservation(ReservationStatus::Approved);
        reservation.check_in_at = Some(Utc::now());
        assert!(reservation.ensure_can_check_out().is_ok());
        reservation.check_out_at = Some(Utc::now());
        assert!(matches!(
            reservation.ensure_can_check_out(),
            Err(AppError::InvalidTransition(_))
        ));
    }
}
