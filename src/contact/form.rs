use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::contact::templates::TemplateCategory;
use crate::notify::{Notification, Notifier};
use crate::utils::error::AppError;

const DEFAULT_THANKS: &str = "Message sent! I'll get back to you soon.";
const SEND_FAILED: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
    pub message: Option<String>,
    pub id: String,
}

/// Clears the submitting flag however the submission ends, including when
/// the caller drops the future.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Transport to the submit-contact function.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReceipt, AppError>;
}

pub struct ContactForm<G: ContactGateway> {
    gateway: G,
    notifier: Arc<dyn Notifier>,
    pub name: String,
    pub email: String,
    pub message: String,
    pub category: TemplateCategory,
    submitting: bool,
}

impl<G: ContactGateway> ContactForm<G> {
    pub fn new(gateway: G, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            category: TemplateCategory::default(),
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces the message with a template from the selected category.
    pub fn apply_template(&mut self, index: usize) -> Result<(), AppError> {
        let template = self
            .category
            .templates()
            .get(index)
            .ok_or_else(|| AppError::NotFound(format!("No template at position {}", index)))?;

        self.message = template.render(&self.name);
        self.notifier
            .notify(Notification::success("Template applied! Customize it as needed."));
        Ok(())
    }

    pub async fn submit(&mut self) -> Result<SubmitReceipt, AppError> {
        if self.submitting {
            return Err(AppError::Conflict("A submission is already in flight".to_string()));
        }
        self.submitting = true;
        let in_flight = InFlight(&mut self.submitting);

        let request = ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        let result = self.gateway.submit(&request).await;
        drop(in_flight);

        match result {
            Ok(receipt) => {
                let thanks = receipt.message.as_deref().unwrap_or(DEFAULT_THANKS);
                self.notifier.notify(Notification::success(thanks));
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Ok(receipt)
            }
            Err(e) => {
                error!(error = %e, "Error submitting contact form");
                self.notifier
                    .notify(Notification::error(SEND_FAILED, e.public_message()));
                Err(e)
            }
        }
    }
}
