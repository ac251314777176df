use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;

use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use kernel::model::{
    id::RatingId,
    rating::{event::CreateRating, validate_rating_target, Rating},
    reservation::Reservation,
};
use kernel::repository::rating::RatingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RatingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn create(&self, event: CreateRating) -> AppResult<Rating> {
        let mut tx = self.db.begin().await?;

        let user_exists: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT 1 FROM users WHERE user_id = $1
            "#,
        )
        .bind(event.rated_user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if user_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "User ({}) was not found.",
                event.rated_user_id
            )));
        }

        if let Some(reservation_id) = event.reservation_id {
            let row: Option<ReservationRow> = sqlx::query_as(
                r#"
                SELECT reservation_id, user_id, space_id, booking_date,
                       start_time, end_time, attendees, purpose, status,
                       requested_at, approved_by, approved_at, cancelled_at,
                       cancellation_reason, check_in_at, check_out_at,
                       access_session_id
                FROM reservations
                WHERE reservation_id = $1
                "#,
            )
            .bind(reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let reservation: Reservation = match row {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "Reservation ({reservation_id}) was not found."
                    )))
                }
                Some(row) => row.try_into()?,
            };

            let already_rated: Option<(i32,)> = sqlx::query_as(
                r#"
                SELECT 1 FROM ratings WHERE reservation_id = $1
                "#,
            )
            .bind(reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            validate_rating_target(&reservation, event.rated_user_id, already_rated.is_some())?;
        }

        let rating_id = RatingId::new();
        // The unique index on ratings.reservation_id backstops the duplicate
        // check against a concurrent insert.
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO ratings
            (rating_id, rated_user_id, reservation_id, score, comment, issued_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING created_at
            "#,
        )
        .bind(rating_id)
        .bind(event.rated_user_id)
        .bind(event.reservation_id)
        .bind(event.score)
        .bind(&event.comment)
        .bind(event.issued_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateRating(
                "A rating already exists for this reservation.".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Rating {
            rating_id,
            rated_user_id: event.rated_user_id,
            reservation_id: event.reservation_id,
            score: event.score,
            comment: event.comment,
            issued_by: event.issued_by,
            created_at,
        })
    }
}
