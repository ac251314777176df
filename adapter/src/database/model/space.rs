use chrono::{DateTime, Utc};
use std::str::FromStr;

use kernel::model::{
    id::SpaceId,
    space::{Space, SpaceStatus},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: SpaceId,
    pub name: String,
    pub building: String,
    pub floor: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub status: String,
    pub utilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SpaceRow> for Space {
    type Error = AppError;

    fn try_from(value: SpaceRow) -> Result<Self, Self::Error> {
        let SpaceRow {
            space_id,
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
            created_at,
            updated_at,
        } = value;
        let status = SpaceStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("Unknown space status: {status}"))
        })?;
        Ok(Space {
            space_id,
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
            created_at,
            updated_at,
        })
    }
}

/// Projection for the admission check: just enough to decide bookability.
#[derive(sqlx::FromRow)]
pub struct SpaceAdmissionRow {
    pub space_id: SpaceId,
    pub status: String,
    pub capacity: i32,
}
