use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;

use crate::{
    extractor::AuthorizedUser,
    model::penalty::{CreatePenaltyRequest, PenaltyResponse, UpdatePenaltyStatusRequest},
};
use kernel::model::{
    id::PenaltyId,
    penalty::event::{CreatePenalty, UpdatePenaltyStatus},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_penalty(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePenaltyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let event = CreatePenalty::new(
        req.user_id,
        req.reservation_id,
        req.reason,
        req.points,
        user.id(),
    );

    let penalty = registry.penalty_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(PenaltyResponse::from(penalty))))
}

pub async fn update_penalty_status(
    user: AuthorizedUser,
    Path(penalty_id): Path<PenaltyId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePenaltyStatusRequest>,
) -> AppResult<Json<PenaltyResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .penalty_repository()
        .update_status(UpdatePenaltyStatus::new(penalty_id, req.status))
        .await
        .map(PenaltyResponse::from)
        .map(Json)
}
