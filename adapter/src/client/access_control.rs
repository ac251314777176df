use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use kernel::client::access_control::{AccessControlClient, AccessSession};
use kernel::model::{id::SpaceId, reservation::Reservation};
use shared::config::AccessControlConfig;

/// Shared-secret header expected by the access gateway.
const PRIVATE_KEY_HEADER: &str = "x-private-key";

const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Serialize)]
struct CreateSessionRequest {
    room_id: SpaceId,
    duration_minutes: i64,
    start_time: NaiveDateTime,
}

#[derive(Deserialize)]
struct CreateSessionResponse {
    session_id: String,
    valid_until: Option<DateTime<Utc>>,
}

pub struct AccessControlClientImpl {
    client: reqwest::Client,
    base_url: String,
    private_key: String,
    timeout: Duration,
    max_retries: u32,
}

impl AccessControlClientImpl {
    pub fn new(config: &AccessControlConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            private_key: config.private_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
        }
    }

    async fn try_create(
        &self,
        payload: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, reqwest::Error> {
        self.client
            .post(format!("{}/api/sessions", self.base_url))
            .timeout(self.timeout)
            .header(PRIVATE_KEY_HEADER, &self.private_key)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn try_revoke(&self, session_id: &str) -> Result<(), reqwest::Error> {
        self.client
            .delete(format!("{}/api/sessions/{}", self.base_url, session_id))
            .timeout(self.timeout)
            .header(PRIVATE_KEY_HEADER, &self.private_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl AccessControlClient for AccessControlClientImpl {
    // A missing access session degrades the reservation, it never fails it:
    // every outcome of this call is Some or None, and failures only get
    // logged.
    async fn create_session(&self, reservation: &Reservation) -> Option<AccessSession> {
        let payload = CreateSessionRequest {
            room_id: reservation.space_id,
            duration_minutes: reservation.slot.duration_minutes(),
            start_time: reservation.booking_date.and_time(reservation.slot.start()),
        };

        for attempt in 0..=self.max_retries {
            match self.try_create(&payload).await {
                Ok(res) => {
                    tracing::info!(
                        reservation_id = %reservation.reservation_id,
                        session_id = %res.session_id,
                        "Access session created"
                    );
                    return Some(AccessSession {
                        session_id: res.session_id,
                        valid_until: res.valid_until,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        reservation_id = %reservation.reservation_id,
                        attempt,
                        error.message = %e,
                        "Access session creation failed"
                    );
                    if attempt < self.max_retries {
                        tokio::time::sleep(RETRY_BACKOFF * (attempt + 1)).await;
                    }
                }
            }
        }

        tracing::error!(
            reservation_id = %reservation.reservation_id,
            "Giving up on access session creation; proceeding without a session"
        );
        None
    }

    async fn revoke_session(&self, session_id: &str) -> bool {
        for attempt in 0..=self.max_retries {
            match self.try_revoke(session_id).await {
                Ok(()) => {
                    tracing::info!(session_id, "Access session revoked");
                    return true;
                }
                Err(e) => {
                    tracing::warn!(
                        session_id,
                        attempt,
                        error.message = %e,
                        "Access session revocation failed"
                    );
                    if attempt < self.max_retries {
                        tokio::time::sleep(RETRY_BACKOFF * (attempt + 1)).await;
                    }
                }
            }
        }

        tracing::error!(session_id, "Giving up on access session revocation");
        false
    }
}
