use async_trait::async_trait;
use derive_new::new;
use std::str::FromStr;

use crate::database::{
    model::{
        reservation::{BlockingSlotRow, ReservationRow},
        space::SpaceAdmissionRow,
    },
    ConnectionPool,
};
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{
        event::{
            CheckInReservation, CheckOutReservation, CreateReservation, DeleteReservation,
            StoreAccessSession, TransitionReservation,
        },
        validate_transition, Reservation, ReservationStatus, TimeSlot,
    },
    space::SpaceStatus,
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

const RESERVATION_COLUMNS: &str = r#"
    reservation_id,
    user_id,
    space_id,
    booking_date,
    start_time,
    end_time,
    attendees,
    purpose,
    status,
    requested_at,
    approved_by,
    approved_at,
    cancelled_at,
    cancellation_reason,
    check_in_at,
    check_out_at,
    access_session_id
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // The admission check and the insert must observe the same committed
        // set: SERIALIZABLE makes the check-then-insert pair atomic per
        // space, so the loser of a concurrent race fails instead of both
        // requests committing overlapping reservations.
        self.set_transaction_serializable(&mut tx).await?;

        // Admission guards, evaluated against the current committed set:
        // the space must exist, be active and large enough, and the slot
        // must not overlap any pending or approved reservation on the same
        // space and date.
        {
            let space_row: Option<SpaceAdmissionRow> = sqlx::query_as(
                r#"
                SELECT space_id, status, capacity
                FROM spaces
                WHERE space_id = $1
                "#,
            )
            .bind(event.space_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let space = match space_row {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "Space ({}) was not found.",
                        event.space_id
                    )))
                }
                Some(s) => s,
            };

            let space_status = SpaceStatus::from_str(&space.status).map_err(|_| {
                AppError::ConversionEntityError(format!(
                    "Unknown space status: {}",
                    space.status
                ))
            })?;
            if !space_status.is_bookable() {
                return Err(AppError::UnprocessableEntity(format!(
                    "Space ({}) is not available for booking.",
                    event.space_id
                )));
            }

            if event.attendees > space.capacity {
                return Err(AppError::UnprocessableEntity(format!(
                    "Attendees ({}) exceeds the capacity ({}) of space ({}).",
                    event.attendees, space.capacity, event.space_id
                )));
            }

            let blocking: Vec<BlockingSlotRow> = sqlx::query_as(
                r#"
                SELECT start_time, end_time
                FROM reservations
                WHERE space_id = $1
                  AND booking_date = $2
                  AND status IN ('pending', 'approved')
                "#,
            )
            .bind(event.space_id)
            .bind(event.booking_date)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            for row in blocking {
                let existing = TimeSlot::new(row.start_time, row.end_time).map_err(|_| {
                    AppError::ConversionEntityError(
                        "A stored reservation has an invalid time slot".into(),
                    )
                })?;
                if existing.overlaps(&event.slot) {
                    return Err(AppError::ReservationConflict(format!(
                        "Space ({}) already has a reservation in the requested time slot.",
                        event.space_id
                    )));
                }
            }
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
            INSERT INTO reservations
            (reservation_id, user_id, space_id, booking_date,
             start_time, end_time, attendees, purpose, status, requested_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', $9)
            "#,
        )
        .bind(reservation_id)
        .bind(event.reserved_by)
        .bind(event.space_id)
        .bind(event.booking_date)
        .bind(event.slot.start())
        .bind(event.slot.end())
        .bind(event.attendees)
        .bind(&event.purpose)
        .bind(event.requested_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Reservation {
            reservation_id,
            reserved_by: event.reserved_by,
            space_id: event.space_id,
            booking_date: event.booking_date,
            slot: event.slot,
            attendees: event.attendees,
            purpose: event.purpose,
            status: ReservationStatus::Pending,
            requested_at: event.requested_at,
            approved_by: None,
            approved_at: None,
            cancelled_at: None,
            cancellation_reason: None,
            check_in_at: None,
            check_out_at: None,
            access_session_id: None,
        })
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
            SELECT {RESERVATION_COLUMNS}
            FROM reservations
            WHERE reservation_id = $1
            "#
        ))
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
            SELECT {RESERVATION_COLUMNS}
            FROM reservations
            ORDER BY booking_date DESC, start_time DESC
            "#
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
            SELECT {RESERVATION_COLUMNS}
            FROM reservations
            WHERE user_id = $1
            ORDER BY booking_date DESC, start_time DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn transition(&self, event: TransitionReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        let mut reservation = self
            .find_for_update(&mut tx, event.reservation_id)
            .await?;

        validate_transition(
            reservation.status,
            event.next_status,
            event.requested_role,
            reservation.is_owned_by(event.requested_by),
        )?;

        match event.next_status {
            ReservationStatus::Approved | ReservationStatus::Rejected => {
                // The approver column records who decided, for rejections too.
                let res = sqlx::query(
                    r#"
                    UPDATE reservations
                    SET status = $2, approved_by = $3, approved_at = $4
                    WHERE reservation_id = $1
                    "#,
                )
                .bind(event.reservation_id)
                .bind(event.next_status.as_ref())
                .bind(event.requested_by)
                .bind(event.occurred_at)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
                if res.rows_affected() < 1 {
                    return Err(AppError::NoRowsAffectedError(
                        "No reservation record has been updated".into(),
                    ));
                }
                reservation.approved_by = Some(event.requested_by);
                reservation.approved_at = Some(event.occurred_at);
            }
            ReservationStatus::Cancelled => {
                let res = sqlx::query(
                    r#"
                    UPDATE reservations
                    SET status = $2, cancelled_at = $3, cancellation_reason = $4
                    WHERE reservation_id = $1
                    "#,
                )
                .bind(event.reservation_id)
                .bind(event.next_status.as_ref())
                .bind(event.occurred_at)
                .bind(&event.cancellation_reason)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
                if res.rows_affected() < 1 {
                    return Err(AppError::NoRowsAffectedError(
                        "No reservation record has been updated".into(),
                    ));
                }
                reservation.cancelled_at = Some(event.occurred_at);
                reservation.cancellation_reason = event.cancellation_reason;
            }
            ReservationStatus::NoShow => {
                let res = sqlx::query(
                    r#"
                    UPDATE reservations
                    SET status = $2
                    WHERE reservation_id = $1
                    "#,
                )
                .bind(event.reservation_id)
                .bind(event.next_status.as_ref())
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
                if res.rows_affected() < 1 {
                    return Err(AppError::NoRowsAffectedError(
                        "No reservation record has been updated".into(),
                    ));
                }
            }
            // `validate_transition` admits no other target status.
            _ => {
                return Err(AppError::InvalidTransition(format!(
                    "Transition to {} is not allowed.",
                    event.next_status.as_ref()
                )))
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        reservation.status = event.next_status;
        Ok(reservation)
    }

    async fn check_in(&self, event: CheckInReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        let mut reservation = self
            .find_for_update(&mut tx, event.reservation_id)
            .await?;

        if !event.requested_role.is_admin() && !reservation.is_owned_by(event.requested_by) {
            return Err(AppError::ForbiddenOperation);
        }
        reservation.ensure_can_check_in()?;

        let res = sqlx::query(
            r#"
            UPDATE reservations
            SET check_in_at = $2
            WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.occurred_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        reservation.check_in_at = Some(event.occurred_at);
        Ok(reservation)
    }

    async fn check_out(&self, event: CheckOutReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        let mut reservation = self
            .find_for_update(&mut tx, event.reservation_id)
            .await?;

        if !event.requested_role.is_admin() && !reservation.is_owned_by(event.requested_by) {
            return Err(AppError::ForbiddenOperation);
        }
        reservation.ensure_can_check_out()?;

        let res = sqlx::query(
            r#"
            UPDATE reservations
            SET check_out_at = $2, status = 'completed'
            WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.occurred_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        reservation.check_out_at = Some(event.occurred_at);
        reservation.status = ReservationStatus::Completed;
        Ok(reservation)
    }

    async fn store_access_session(&self, event: StoreAccessSession) -> AppResult<()> {
        let res = sqlx::query(
            r#"
            UPDATE reservations
            SET access_session_id = $2
            WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(&event.session_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "Specified reservation not found".into(),
            ));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        // Penalties and ratings keep their rows; their reservation reference
        // becomes null through the foreign-key ON DELETE SET NULL.
        let res = sqlx::query(
            r#"
            DELETE FROM reservations WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Reservation ({}) was not found.",
                event.reservation_id
            )));
        }

        Ok(())
    }
}

impl ReservationRepositoryImpl {
    // Used by create so that the overlap check and the insert observe one
    // snapshot.
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // Locks the target row so guard evaluation and the update commit as one
    // unit.
    async fn find_for_update(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        reservation_id: ReservationId,
    ) -> AppResult<Reservation> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
            SELECT {RESERVATION_COLUMNS}
            FROM reservations
            WHERE reservation_id = $1
            FOR UPDATE
            "#
        ))
        .bind(reservation_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            None => Err(AppError::EntityNotFound(format!(
                "Reservation ({reservation_id}) was not found."
            ))),
            Some(row) => row.try_into(),
        }
    }
}
