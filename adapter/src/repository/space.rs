use async_trait::async_trait;
use derive_new::new;

use crate::database::{model::space::SpaceRow, ConnectionPool};
use kernel::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, DeleteSpace, UpdateSpace},
        Space,
    },
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        let res = sqlx::query(
            r#"
            INSERT INTO spaces
            (space_id, name, building, floor, location, capacity, status, utilities)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(space_id)
        .bind(&event.name)
        .bind(&event.building)
        .bind(&event.floor)
        .bind(&event.location)
        .bind(event.capacity)
        .bind(event.status.as_ref())
        .bind(&event.utilities)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No space record has been created".into(),
            ));
        }

        Ok(space_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
            SELECT space_id, name, building, floor, location,
                   capacity, status, utilities, created_at, updated_at
            FROM spaces
            ORDER BY building, floor, name
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Space::try_from).collect()
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
            SELECT space_id, name, building, floor, location,
                   capacity, status, utilities, created_at, updated_at
            FROM spaces
            WHERE space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Space::try_from).transpose()
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
            UPDATE spaces
            SET name = COALESCE($2, name),
                building = COALESCE($3, building),
                floor = COALESCE($4, floor),
                location = COALESCE($5, location),
                capacity = COALESCE($6, capacity),
                status = COALESCE($7, status),
                utilities = COALESCE($8, utilities),
                updated_at = now()
            WHERE space_id = $1
            "#,
        )
        .bind(event.space_id)
        .bind(&event.name)
        .bind(&event.building)
        .bind(&event.floor)
        .bind(&event.location)
        .bind(event.capacity)
        .bind(event.status.map(|s| s.as_ref().to_string()))
        .bind(&event.utilities)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Space ({}) was not found.",
                event.space_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
            DELETE FROM spaces WHERE space_id = $1
            "#,
        )
        .bind(event.space_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Space ({}) was not found.",
                event.space_id
            )));
        }

        Ok(())
    }
}
