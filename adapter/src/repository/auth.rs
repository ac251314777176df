use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::redis::{model::RedisKey, RedisClient};
use kernel::model::{auth::AccessToken, id::UserId};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

pub struct AuthorizationKey(String);

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UserId::from_str(&value).map(Self).map_err(|e| {
            AppError::ConversionEntityError(format!("Failed to parse a stored user id: {e}"))
        })
    }
}

pub struct AuthRepositoryImpl {
    kv: Arc<RedisClient>,
}

impl AuthRepositoryImpl {
    pub fn new(kv: Arc<RedisClient>) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key = AuthorizationKey::from(access_token);
        let user_id = self.kv.get(&key).await?;
        Ok(user_id.map(AuthorizedUserId::into_inner))
    }
}
