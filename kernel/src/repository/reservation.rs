use async_trait::async_trait;

use crate::model::{
    id::{ReservationId, UserId},
    reservation::{
        event::{
            CheckInReservation, CheckOutReservation, CreateReservation, DeleteReservation,
            StoreAccessSession, TransitionReservation,
        },
        Reservation,
    },
};
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Admits a reservation request. The overlap check and the insert run
    /// atomically per space; the loser of a concurrent race is rejected.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
    /// Applies a status transition after evaluating the state-machine guard
    /// against the committed row.
    async fn transition(&self, event: TransitionReservation) -> AppResult<Reservation>;
    async fn check_in(&self, event: CheckInReservation) -> AppResult<Reservation>;
    async fn check_out(&self, event: CheckOutReservation) -> AppResult<Reservation>;
    /// Records the access-session handle minted by the gateway.
    async fn store_access_session(&self, event: StoreAccessSession) -> AppResult<()>;
    /// Administrator-only hard delete, outside the state machine.
    async fn delete(&self, event: DeleteReservation) -> AppResult<()>;
}
