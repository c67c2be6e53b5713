mod submit_contact;

pub use submit_contact::{ContactReceipt, SubmitContactError, SubmitContactInput, SubmitContactUseCase};
