use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::{ReservationId, SpaceId, UserId},
    reservation::{Reservation, ReservationStatus},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(skip)]
    pub booking_date: NaiveDate,
    #[garde(skip)]
    pub start_time: NaiveTime,
    #[garde(skip)]
    pub end_time: NaiveTime,
    #[garde(range(min = 1))]
    pub attendees: i32,
    #[garde(length(min = 1))]
    pub purpose: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationStatusRequest {
    #[garde(skip)]
    pub status: ReservationStatus,
    #[garde(skip)]
    pub cancellation_reason: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub reserved_by: UserId,
    pub space_id: SpaceId,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
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

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            reserved_by,
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
        } = value;
        Self {
            reservation_id,
            reserved_by,
            space_id,
            booking_date,
            start_time: slot.start(),
            end_time: slot.end(),
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_zero_attendees() {
        let req = CreateReservationRequest {
            space_id: SpaceId::new(),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            attendees: 0,
            purpose: "group study".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn create_request_rejects_empty_purpose() {
        let req = CreateReservationRequest {
            space_id: SpaceId::new(),
            booking_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            attendees: 3,
            purpose: "".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn status_request_uses_snake_case_wire_names() {
        let req: UpdateReservationStatusRequest =
            serde_json::from_str(r#"{"status": "no_show"}"#).unwrap();
        assert_eq!(req.status, ReservationStatus::NoShow);
        assert!(req.cancellation_reason.is_none());
    }
}
