mod logging_contact_inbox;

pub use logging_contact_inbox::LoggingContactInbox;
