use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::ContactInboxError;
use crate::modules::contact::domain::ContactValidationError;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitContactInput {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Project inquiry")]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub submission_id: Uuid,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

impl From<ContactInboxError> for SubmitContactError {
    fn from(err: ContactInboxError) -> Self {
        match err {
            ContactInboxError::DeliveryFailed(msg) => SubmitContactError::DeliveryFailed(msg),
        }
    }
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: SubmitContactInput)
        -> Result<ContactReceipt, SubmitContactError>;
}
