pub mod form;
pub mod gateway;
pub mod templates;
pub mod validation;

pub use form::{ContactForm, ContactGateway, SubmitReceipt};
pub use gateway::HttpContactGateway;
pub use templates::{MessageTemplate, TemplateCategory};
pub use validation::{validate_submission, ContactPayload, SubmissionError};
