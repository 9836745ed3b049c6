use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::models::NewContact;

lazy_static! {
    static ref EMAIL_RX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Inbound body of the submit-contact function. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RX.is_match(email)
}

/// Checks presence first, then the email shape, and returns the trimmed
/// submission with a lower-cased email.
pub fn validate_submission(payload: &ContactPayload) -> Result<NewContact, SubmissionError> {
    fn present(field: &Option<String>) -> Option<&str> {
        field.as_deref().filter(|v| !v.is_empty())
    }

    let (Some(name), Some(email), Some(message)) = (
        present(&payload.name),
        present(&payload.email),
        present(&payload.message),
    ) else {
        return Err(SubmissionError::MissingFields);
    };

    if !is_valid_email(email) {
        return Err(SubmissionError::InvalidEmail);
    }

    Ok(NewContact {
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        message: message.trim().to_string(),
    })
}
