use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::id::{PenaltyId, ReservationId, UserId};

pub mod event;

/// Accountability record attached to a user by an administrator. The
/// reservation reference is optional and survives reservation deletion as
/// null.
#[derive(Debug)]
pub struct Penalty {
    pub penalty_id: PenaltyId,
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub reason: String,
    pub points: i32,
    pub status: PenaltyStatus,
    pub issued_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PenaltyStatus {
    #[default]
    Active,
    Resolved,
    Expired,
}
