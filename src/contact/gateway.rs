use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::contact::form::{ContactGateway, ContactRequest, SubmitReceipt};
use crate::utils::error::AppError;

pub struct HttpContactGateway {
    client: Client,
    function_url: String,
}

impl HttpContactGateway {
    pub fn new(function_url: String) -> Self {
        Self {
            client: Client::new(),
            function_url,
        }
    }
}

#[derive(Deserialize)]
struct FunctionError {
    error: String,
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReceipt, AppError> {
        let response = self
            .client
            .post(&self.function_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Network error calling submit-contact: {:?}", e);
                AppError::ExternalService("Could not reach the contact service".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<FunctionError>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Contact service returned {}", status));
            return Err(AppError::ExternalService(message));
        }

        let receipt = response.json::<SubmitReceipt>().await.map_err(|e| {
            AppError::ExternalService(format!("Malformed contact service response: {}", e))
        })?;
        debug!(id = %receipt.id, "Contact submission accepted");
        Ok(receipt)
    }
}
