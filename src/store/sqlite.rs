use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{ContactStore, EventStore};
use crate::models::contact::NEW_STATUS;
use crate::models::{ContactSubmission, Event, EventFields, NewContact};
use crate::utils::error::AppError;

pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .map_err(|e| AppError::Internal(format!("migrations failed: {e}")))
}

pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for SqliteEventStore {
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
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
                title = ?, date = ?, time = ?, location = ?, description = ?,
                event_type = ?, status = ?, feedback = ?, image_url = ?
               WHERE id = ? RETURNING *"#,
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
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event '{}' not found", id)));
        }
        Ok(())
    }
}

pub struct SqliteContactStore {
    pool: SqlitePool,
}

impl SqliteContactStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn insert(&self, contact: &NewContact) -> Result<ContactSubmission, AppError> {
        sqlx::query_as::<_, ContactSubmission>(
            r#"INSERT INTO contacts (id, name, email, message, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?)
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
