use std::sync::Arc;

use chrono::NaiveDate;

use crate::events::repository::EventRepository;
use crate::models::{Event, EventFields, EventStatus, EventType};
use crate::session::SessionSubscription;
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Closed,
    Creating,
    Editing(Event),
}

/// Raw form inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFormData {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub kind: EventType,
    pub status: EventStatus,
    pub feedback: String,
}

impl EventFormData {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.clone(),
            location: event.location.clone(),
            description: event.description.clone(),
            kind: event.kind,
            status: event.status,
            feedback: event.feedback.clone().unwrap_or_default(),
        }
    }

    fn to_fields(&self, image_url: Option<String>) -> Result<EventFields, AppError> {
        let required = [
            ("Title", &self.title),
            ("Date", &self.date),
            ("Time", &self.time),
            ("Location", &self.location),
            ("Description", &self.description),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::Validation(format!("{} is required", label)));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Date must be YYYY-MM-DD".to_string()))?;

        Ok(EventFields {
            title: self.title.clone(),
            date,
            time: self.time.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            kind: self.kind,
            status: self.status,
            feedback: (!self.feedback.is_empty()).then(|| self.feedback.clone()),
            image_url,
        })
    }
}

/// Add/edit dialog for events.
///
/// Controls are only usable while the session subscription reports a
/// signed-in operator.
pub struct EventFormController {
    repository: Arc<EventRepository>,
    session: SessionSubscription,
    mode: FormMode,
    pub data: EventFormData,
}

impl EventFormController {
    pub fn new(repository: Arc<EventRepository>, session: SessionSubscription) -> Self {
        Self {
            repository,
            session,
            mode: FormMode::Closed,
            data: EventFormData::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn controls_visible(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Feedback is only offered for completed events. Its value survives
    /// while hidden.
    pub fn feedback_visible(&self) -> bool {
        self.data.status == EventStatus::Completed
    }

    pub fn clear_feedback(&mut self) {
        self.data.feedback.clear();
    }

    pub fn open_create(&mut self) -> Result<(), AppError> {
        self.require_session()?;
        self.data = EventFormData::default();
        self.mode = FormMode::Creating;
        Ok(())
    }

    pub fn open_edit(&mut self, event: &Event) -> Result<(), AppError> {
        self.require_session()?;
        self.data = EventFormData::from_event(event);
        self.mode = FormMode::Editing(event.clone());
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Validates and dispatches. The form closes only when the store
    /// accepted the write.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        self.require_session()?;
        let fields = match &self.mode {
            FormMode::Closed => {
                return Err(AppError::Conflict("The event form is not open".to_string()))
            }
            FormMode::Creating => self.data.to_fields(None)?,
            FormMode::Editing(event) => self.data.to_fields(event.image_url.clone())?,
        };

        match &self.mode {
            FormMode::Editing(event) => self.repository.update(&event.id, fields).await?,
            _ => self.repository.create(fields).await?,
        }

        self.reset();
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.require_session()?;
        self.repository.delete(id).await
    }

    fn require_session(&self) -> Result<(), AppError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    fn reset(&mut self) {
        self.data = EventFormData::default();
        self.mode = FormMode::Closed;
    }
}
