pub mod entities;

pub use entities::{ContactMessage, ContactValidationError};
