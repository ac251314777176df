use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;

use crate::database::{model::penalty::PenaltyRow, ConnectionPool};
use kernel::model::{
    id::PenaltyId,
    penalty::{
        event::{CreatePenalty, UpdatePenaltyStatus},
        Penalty, PenaltyStatus,
    },
};
use kernel::repository::penalty::PenaltyRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PenaltyRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PenaltyRepository for PenaltyRepositoryImpl {
    async fn create(&self, event: CreatePenalty) -> AppResult<Penalty> {
        let mut tx = self.db.begin().await?;

        let user_exists: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT 1 FROM users WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if user_exists.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "User ({}) was not found.",
                event.user_id
            )));
        }

        // A penalty may reference a reservation in any state; only existence
        // is required.
        if let Some(reservation_id) = event.reservation_id {
            let reservation_exists: Option<(i32,)> = sqlx::query_as(
                r#"
                SELECT 1 FROM reservations WHERE reservation_id = $1
                "#,
            )
            .bind(reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
            if reservation_exists.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "Reservation ({reservation_id}) was not found."
                )));
            }
        }

        let penalty_id = PenaltyId::new();
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO penalties
            (penalty_id, user_id, reservation_id, reason, points, status, issued_by)
            VALUES ($1, $2, $3, $4, $5, 'active', $6)
            RETURNING created_at
            "#,
        )
        .bind(penalty_id)
        .bind(event.user_id)
        .bind(event.reservation_id)
        .bind(&event.reason)
        .bind(event.points)
        .bind(event.issued_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Penalty {
            penalty_id,
            user_id: event.user_id,
            reservation_id: event.reservation_id,
            reason: event.reason,
            points: event.points,
            status: PenaltyStatus::Active,
            issued_by: event.issued_by,
            created_at,
        })
    }

    async fn update_status(&self, event: UpdatePenaltyStatus) -> AppResult<Penalty> {
        let row: Option<PenaltyRow> = sqlx::query_as(
            r#"
            UPDATE penalties
            SET status = $2
            WHERE penalty_id = $1
            RETURNING penalty_id, user_id, reservation_id, reason,
                      points, status, issued_by, created_at
            "#,
        )
        .bind(event.penalty_id)
        .bind(event.status.as_ref())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            None => Err(AppError::EntityNotFound(format!(
                "Penalty ({}) was not found.",
                event.penalty_id
            ))),
            Some(row) => row.try_into(),
        }
    }
}
