use async_trait::async_trait;

use crate::model::penalty::{
    event::{CreatePenalty, UpdatePenaltyStatus},
    Penalty,
};
use shared::error::AppResult;

#[async_trait]
pub trait PenaltyRepository: Send + Sync {
    /// Issues a penalty. The target user must exist; a referenced
    /// reservation must exist but may be in any state.
    async fn create(&self, event: CreatePenalty) -> AppResult<Penalty>;
    async fn update_status(&self, event: UpdatePenaltyStatus) -> AppResult<Penalty>;
}
