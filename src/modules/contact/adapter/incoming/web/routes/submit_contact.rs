use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactInput,
    responses(
        (status = 202, description = "Message accepted", body = ContactReceipt),
        (status = 400, description = "Invalid field", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    payload: web::Json<SubmitContactInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(payload.into_inner()).await {
        Ok(receipt) => ApiResponse::accepted(receipt),

        Err(SubmitContactError::Invalid(err)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("{}: {}", err.field(), err))
        }

        Err(SubmitContactError::DeliveryFailed(msg)) => {
            error!("Failed to deliver contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
