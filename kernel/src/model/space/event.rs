use crate::model::{id::SpaceId, space::SpaceStatus};

pub struct CreateSpace {
    pub name: String,
    pub building: String,
    pub floor: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub status: SpaceStatus,
    pub utilities: Vec<String>,
}

#[derive(Debug)]
pub struct UpdateSpace {
    pub space_id: SpaceId,
    pub name: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<SpaceStatus>,
    pub utilities: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
}
