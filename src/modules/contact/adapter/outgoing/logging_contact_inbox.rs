use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::{ContactInbox, ContactInboxError};
use crate::modules::contact::domain::ContactMessage;

/// Records the submission in the log and drops it. Nothing is sent.
/// Visitor details only appear at debug level.
#[derive(Debug, Clone, Default)]
pub struct LoggingContactInbox;

#[async_trait]
impl ContactInbox for LoggingContactInbox {
    async fn deliver(
        &self,
        submission_id: Uuid,
        message: &ContactMessage,
    ) -> Result<(), ContactInboxError> {
        info!(
            %submission_id,
            subject_chars = message.subject().chars().count(),
            message_chars = message.message().chars().count(),
            "Contact form submitted"
        );

        debug!(
            %submission_id,
            name = message.name(),
            email = message.email(),
            subject = message.subject(),
            "Contact form sender"
        );

        Ok(())
    }
}
