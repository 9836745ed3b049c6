mod common;

use async_trait::async_trait;
use common::TestApp;
use portfolio_server::events::{EventFormController, EventRepository, FormMode};
use portfolio_server::models::{Event, EventFields, EventStatus, EventType};
use portfolio_server::notify::{NotificationLog, Variant};
use portfolio_server::session::SessionPublisher;
use portfolio_server::store::EventStore;
use portfolio_server::utils::error::AppError;
use std::sync::Arc;

struct Board {
    app: TestApp,
    repo: Arc<EventRepository>,
    log: Arc<NotificationLog>,
    session: SessionPublisher,
    form: EventFormController,
}

async fn board() -> Board {
    let app = TestApp::new().await;
    let log = Arc::new(NotificationLog::default());
    let repo = Arc::new(EventRepository::new(app.stores.events.clone(), log.clone()));
    let session = SessionPublisher::default();
    let form = EventFormController::new(repo.clone(), session.subscribe());
    Board {
        app,
        repo,
        log,
        session,
        form,
    }
}

fn fill(form: &mut EventFormController, title: &str, date: &str) {
    form.data.title = title.into();
    form.data.date = date.into();
    form.data.time = "6 PM".into();
    form.data.location = "Online".into();
    form.data.description = "Community meetup".into();
    form.data.kind = EventType::Meetup;
}

#[tokio::test]
async fn test_controls_follow_the_session() {
    let mut b = board().await;
    assert!(!b.form.controls_visible());
    assert!(matches!(b.form.open_create(), Err(AppError::Unauthorized)));
    assert!(matches!(b.form.delete("x").await, Err(AppError::Unauthorized)));

    b.session.sign_in();
    assert!(b.form.controls_visible());
    b.form.open_create().unwrap();
    assert_eq!(b.form.mode(), &FormMode::Creating);

    b.session.sign_out();
    assert!(!b.form.controls_visible());
}

#[tokio::test]
async fn test_create_refreshes_cached_list() {
    let mut b = board().await;
    b.session.sign_in();

    b.form.open_create().unwrap();
    fill(&mut b.form, "GDG Meetup", "2025-08-15");
    b.form.submit().await.unwrap();

    assert!(!b.form.is_open());
    assert_eq!(b.form.data.title, "");
    let events = b.repo.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "GDG Meetup");
    assert_eq!(events[0].kind, EventType::Meetup);
    assert_eq!(events[0].feedback, None);
    assert_eq!(b.log.last().unwrap().title, "Event created successfully!");
}

#[tokio::test]
async fn test_validation_failure_keeps_form_open() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "", "2025-08-15");

    assert!(matches!(b.form.submit().await, Err(AppError::Validation(_))));
    assert_eq!(b.form.mode(), &FormMode::Creating);
    assert_eq!(b.form.data.location, "Online");
    assert!(b.repo.events().await.is_empty());
}

#[tokio::test]
async fn test_edit_moves_event_between_partitions() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "Hackathon", "2025-01-20");
    b.form.submit().await.unwrap();

    let original = b.repo.events().await.remove(0);
    b.form.open_edit(&original).unwrap();
    assert_eq!(b.form.data.feedback, "");
    assert!(!b.form.feedback_visible());

    b.form.data.status = EventStatus::Completed;
    assert!(b.form.feedback_visible());
    b.form.data.feedback = "Reached the finals".into();
    b.form.submit().await.unwrap();

    let events = b.repo.events().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, original.id);
    assert_eq!(events[0].status, EventStatus::Completed);
    assert_eq!(events[0].feedback.as_deref(), Some("Reached the finals"));

    let parts = portfolio_server::events::partition(events);
    assert_eq!(parts.completed.len(), 1);
    assert!(parts.upcoming.is_empty());
}

#[tokio::test]
async fn test_hidden_feedback_is_preserved_until_cleared() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    b.form.data.status = EventStatus::Completed;
    b.form.data.feedback = "notes".into();

    b.form.data.status = EventStatus::Upcoming;
    assert!(!b.form.feedback_visible());
    assert_eq!(b.form.data.feedback, "notes");

    b.form.clear_feedback();
    assert_eq!(b.form.data.feedback, "");
}

#[tokio::test]
async fn test_cancel_returns_to_closed() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "Draft", "2025-01-01");
    b.form.cancel();

    assert_eq!(b.form.mode(), &FormMode::Closed);
    assert_eq!(b.form.data.title, "");
    assert!(matches!(b.form.submit().await, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_deleting_missing_event_keeps_list() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "Keep me", "2025-01-01");
    b.form.submit().await.unwrap();

    let err = b.form.delete("does-not-exist").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(b.repo.events().await.len(), 1);

    let last = b.log.last().unwrap();
    assert_eq!(last.title, "Error deleting event");
    assert_eq!(last.variant, Variant::Destructive);

    let id = b.repo.events().await[0].id.clone();
    b.form.delete(&id).await.unwrap();
    assert!(b.repo.events().await.is_empty());
}

#[tokio::test]
async fn test_sign_out_while_creating_blocks_the_write() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "Late entry", "2025-04-01");

    b.session.sign_out();
    assert!(matches!(b.form.submit().await, Err(AppError::Unauthorized)));
    assert!(b.app.stores.events.list().await.unwrap().is_empty());
    assert!(b.repo.events().await.is_empty());
}

#[tokio::test]
async fn test_sign_out_while_editing_leaves_record_unchanged() {
    let mut b = board().await;
    b.session.sign_in();
    b.form.open_create().unwrap();
    fill(&mut b.form, "Original title", "2025-04-01");
    b.form.submit().await.unwrap();

    let event = b.repo.events().await.remove(0);
    b.form.open_edit(&event).unwrap();
    b.form.data.title = "Replaced title".into();

    b.session.sign_out();
    assert!(matches!(b.form.submit().await, Err(AppError::Unauthorized)));

    let stored = b.app.stores.events.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, event.id);
    assert_eq!(stored[0].title, "Original title");
}

struct BrokenStore;

#[async_trait]
impl EventStore for BrokenStore {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        Err(AppError::ExternalService("store offline".into()))
    }
    async fn insert(&self, _fields: &EventFields) -> Result<Event, AppError> {
        Err(AppError::ExternalService("store offline".into()))
    }
    async fn update(&self, _id: &str, _fields: &EventFields) -> Result<Event, AppError> {
        Err(AppError::ExternalService("store offline".into()))
    }
    async fn delete(&self, _id: &str) -> Result<(), AppError> {
        Err(AppError::ExternalService("store offline".into()))
    }
}

#[tokio::test]
async fn test_store_failure_surfaces_and_keeps_form_open() {
    let log = Arc::new(NotificationLog::default());
    let repo = Arc::new(EventRepository::new(Arc::new(BrokenStore), log.clone()));
    let session = SessionPublisher::new(true);
    let mut form = EventFormController::new(repo.clone(), session.subscribe());

    assert!(repo.fetch_all().await.is_err());
    assert_eq!(log.last().unwrap().title, "Error fetching events");

    form.open_create().unwrap();
    fill(&mut form, "Offline", "2025-01-01");
    assert!(form.submit().await.is_err());
    assert!(form.is_open());
    assert_eq!(form.data.title, "Offline");

    let last = log.last().unwrap();
    assert_eq!(last.title, "Error creating event");
    assert_eq!(last.description.as_deref(), Some("store offline"));
}
