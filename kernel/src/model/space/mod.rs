use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::id::SpaceId;

pub mod event;

#[derive(Debug)]
pub struct Space {
    pub space_id: SpaceId,
    pub name: String,
    pub building: String,
    pub floor: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub status: SpaceStatus,
    pub utilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpaceStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl SpaceStatus {
    /// Only active spaces accept new reservation requests. Reservations
    /// admitted before a status change stay valid.
    pub fn is_bookable(&self) -> bool {
        matches!(self, SpaceStatus::Active)
    }
}
