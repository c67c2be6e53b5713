use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactInboxError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Where accepted contact messages go.
#[async_trait]
pub trait ContactInbox: Send + Sync {
    async fn deliver(
        &self,
        submission_id: Uuid,
        message: &ContactMessage,
    ) -> Result<(), ContactInboxError>;
}
