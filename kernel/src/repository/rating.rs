use async_trait::async_trait;

use crate::model::rating::{event::CreateRating, Rating};
use shared::error::AppResult;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Issues a rating. When tied to a reservation the guards run in order:
    /// reservation exists, belongs to the rated user, is completed, has no
    /// rating yet.
    async fn create(&self, event: CreateRating) -> AppResult<Rating>;
}
