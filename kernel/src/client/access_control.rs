use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::model::reservation::Reservation;

/// Session handle returned by the physical-access gateway.
#[derive(Debug)]
pub struct AccessSession {
    pub session_id: String,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Outbound bridge to the physical-access gateway. Both operations are
/// best-effort: a failure is logged by the implementation and reported as
/// `None`/`false`, never as an error, so lifecycle transitions proceed in a
/// degraded state rather than failing.
#[async_trait]
pub trait AccessControlClient: Send + Sync {
    async fn create_session(&self, reservation: &Reservation) -> Option<AccessSession>;
    async fn revoke_session(&self, session_id: &str) -> bool;
}
