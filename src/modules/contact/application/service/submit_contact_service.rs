use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactInbox;
use crate::modules::contact::domain::ContactMessage;

pub struct SubmitContactService<I>
where
    I: ContactInbox,
{
    inbox: I,
}

impl<I> SubmitContactService<I>
where
    I: ContactInbox,
{
    pub fn new(inbox: I) -> Self {
        Self { inbox }
    }
}

#[async_trait]
impl<I> SubmitContactUseCase for SubmitContactService<I>
where
    I: ContactInbox + Send + Sync,
{
    async fn execute(
        &self,
        input: SubmitContactInput,
    ) -> Result<ContactReceipt, SubmitContactError> {
        let message =
            ContactMessage::new(&input.name, &input.email, &input.subject, &input.message)?;

        let submission_id = Uuid::new_v4();
        self.inbox.deliver(submission_id, &message).await?;

        Ok(ContactReceipt {
            submission_id,
            received_at: Utc::now(),
        })
    }
}
