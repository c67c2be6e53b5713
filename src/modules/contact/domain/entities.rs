use email_address::EmailAddress;

pub const MAX_MESSAGE_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("{0} must not be empty")]
    Blank(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("message must be at most {MAX_MESSAGE_CHARS} characters")]
    MessageTooLong,
}

impl ContactValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ContactValidationError::Blank(field) => field,
            ContactValidationError::InvalidEmail => "email",
            ContactValidationError::MessageTooLong => "message",
        }
    }
}

/// A visitor's message. Fields are trimmed and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

fn required(field: &'static str, value: &str) -> Result<String, ContactValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}

impl ContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        if !EmailAddress::is_valid(&email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        let subject = required("subject", subject)?;
        let message = required("message", message)?;
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactValidationError::MessageTooLong);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
