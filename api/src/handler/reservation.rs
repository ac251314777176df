use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use garde::Validate;

use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CreateReservationRequest, ReservationResponse, ReservationsResponse,
        UpdateReservationStatusRequest,
    },
};
use kernel::model::{
    id::ReservationId,
    reservation::{
        event::{
            CheckInReservation, CheckOutReservation, CreateReservation, DeleteReservation,
            StoreAccessSession, TransitionReservation,
        },
        ReservationStatus, TimeSlot,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    // The interval is checked before any I/O; everything stateful (space
    // existence, capacity, overlap) happens inside the repository's
    // serializable transaction.
    let slot = TimeSlot::new(req.start_time, req.end_time)?;
    let event = CreateReservation::new(
        req.space_id,
        user.id(),
        req.booking_date,
        slot,
        req.attendees,
        req.purpose,
        Utc::now(),
    );

    let reservation = registry.reservation_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse::from(reservation)),
    ))
}

pub async fn show_reservation_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    let reservations = if user.is_admin() {
        registry.reservation_repository().find_all().await?
    } else {
        registry
            .reservation_repository()
            .find_by_user_id(user.id())
            .await?
    };

    Ok(Json(ReservationsResponse::from(reservations)))
}

pub async fn show_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("Reservation ({reservation_id}) was not found."))
        })?;

    if !user.is_admin() && !reservation.is_owned_by(user.id()) {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(Json(ReservationResponse::from(reservation)))
}

pub async fn update_reservation_status(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationStatusRequest>,
) -> AppResult<Json<ReservationResponse>> {
    req.validate(&())?;

    let next_status = req.status;
    let event = TransitionReservation::new(
        reservation_id,
        user.id(),
        user.role(),
        next_status,
        req.cancellation_reason,
        Utc::now(),
    );

    let mut reservation = registry.reservation_repository().transition(event).await?;

    match next_status {
        // An approval binds the slot, so this is the point where the
        // physical-access session is minted. The call is best-effort: a
        // missing session degrades the reservation, it never fails it.
        ReservationStatus::Approved => {
            if let Some(session) = registry
                .access_control_client()
                .create_session(&reservation)
                .await
            {
                let store = StoreAccessSession::new(reservation_id, session.session_id.clone());
                match registry
                    .reservation_repository()
                    .store_access_session(store)
                    .await
                {
                    Ok(()) => reservation.access_session_id = Some(session.session_id),
                    // The transition already committed; report it as it
                    // stands rather than failing the approval.
                    Err(e) => tracing::warn!(
                        reservation_id = %reservation_id,
                        error.message = %e,
                        "Failed to persist the access session handle"
                    ),
                }
            }
        }
        ReservationStatus::Cancelled => {
            if let Some(session_id) = reservation.access_session_id.as_deref() {
                registry
                    .access_control_client()
                    .revoke_session(session_id)
                    .await;
            }
        }
        _ => {}
    }

    Ok(Json(ReservationResponse::from(reservation)))
}

pub async fn check_in_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let event = CheckInReservation::new(reservation_id, user.id(), user.role(), Utc::now());

    registry
        .reservation_repository()
        .check_in(event)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn check_out_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let event = CheckOutReservation::new(reservation_id, user.id(), user.role(), Utc::now());

    registry
        .reservation_repository()
        .check_out(event)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

// Data-correction escape hatch, outside the state machine.
pub async fn delete_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .reservation_repository()
        .delete(DeleteReservation::new(reservation_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
