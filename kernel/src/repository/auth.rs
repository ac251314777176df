use async_trait::async_trait;

use crate::model::{auth::AccessToken, id::UserId};
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Resolves a bearer token to the user it was issued for, or `None` when
    /// the token is unknown or expired.
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
}
