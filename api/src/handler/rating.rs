use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;

use crate::{
    extractor::AuthorizedUser,
    model::rating::{CreateRatingRequest, RatingResponse},
};
use kernel::model::rating::event::CreateRating;
use registry::AppRegistry;
use shared::error::AppError;

pub async fn register_rating(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRatingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let event = CreateRating::new(
        req.rated_user_id,
        req.reservation_id,
        req.score,
        req.comment,
        user.id(),
    );

    let rating = registry.rating_repository().create(event).await?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))))
}
