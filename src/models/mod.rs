pub mod contact;
pub mod content;
pub mod event;

pub use contact::{ContactSubmission, NewContact};
pub use event::{Event, EventFields, EventStatus, EventType};
