use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ContactStore, EventStore};
use crate::models::contact::NEW_STATUS;
use crate::models::{ContactSubmission, Event, EventFields, NewContact};
use crate::utils::error::AppError;

pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date DESC, created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, fields: &EventFields) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, date, time, location, description,
                event_type, status, feedback, image_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&fields.title)
        .bind(fields.date)
        .bind(&fields.time)
        .bind(&fields.location)
        .bind(&fields.description)
        .bind(fields.kind.as_str())
        .bind(fields.status.as_str())
        .bind(&fields.feedback)
        .bind(&fields.image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, fields: &EventFields) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                title = $1, date = $2, time = $3, location = $4, description = $5,
                event_type = $6, status = $7, feedback = $8, image_url = $9
               WHERE id = $10 RETURNING *"#,
        )
        .bind(&fields.title)
        .bind(fields.date)
        .bind(&fields.time)
        .bind(&fields.location)
        .bind(&fields.description)
        .bind(fields.kind.as_str())
        .bind(fields.status.as_str())
        .bind(&fields.feedback)
        .bind(&fields.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event '{}' not found", id)));
        }
        Ok(())
    }
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(&self, contact: &NewContact) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            r#"INSERT INTO contacts (id, name, email, message, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .bind(NEW_STATUS)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
