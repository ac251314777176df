use garde::Validate;
use serde::{Deserialize, Serialize};

use kernel::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, UpdateSpace},
        Space, SpaceStatus,
    },
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub building: String,
    #[garde(length(min = 1))]
    pub floor: String,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(skip)]
    pub status: Option<SpaceStatus>,
    #[garde(skip)]
    #[serde(default)]
    pub utilities: Vec<String>,
}

impl From<CreateSpaceRequest> for CreateSpace {
    fn from(value: CreateSpaceRequest) -> Self {
        let CreateSpaceRequest {
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
        } = value;
        CreateSpace {
            name,
            building,
            floor,
            location,
            capacity,
            status: status.unwrap_or_default(),
            utilities,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpaceRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub building: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub floor: Option<String>,
    #[garde(skip)]
    pub location: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub status: Option<SpaceStatus>,
    #[garde(skip)]
    pub utilities: Option<Vec<String>>,
}

impl UpdateSpaceRequest {
    pub fn into_event(self, space_id: SpaceId) -> UpdateSpace {
        let UpdateSpaceRequest {
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
        } = self;
        UpdateSpace {
            space_id,
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<Space>> for SpacesResponse {
    fn from(value: Vec<Space>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub space_id: SpaceId,
    pub name: String,
    pub building: String,
    pub floor: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub status: SpaceStatus,
    pub utilities: Vec<String>,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            space_id,
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
            created_at: _,
            updated_at: _,
        } = value;
        Self {
            space_id,
            name,
            building,
            floor,
            location,
            capacity,
            status,
            utilities,
        }
    }
}
