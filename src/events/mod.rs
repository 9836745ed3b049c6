pub mod form;
pub mod repository;
pub mod view;

pub use form::{EventFormController, EventFormData, FormMode};
pub use repository::EventRepository;
pub use view::{partition, visible, EventFilter, Partitions};
