// Start of file: /src/shared/error_handler/mod.rs

// * Global error handling logic for layers (e.g. timeouts, large payloads).

use axum::{
    BoxError,
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::error::Error;
use tracing::error;
// * tower's error type for timeouts
use tower::timeout::error::Elapsed;
// * Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

use crate::shared::utils::to_two_space_indented_json;

// * The JSON body returned for errors caught at the layer level
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub error: String,
}

// ? This is the main function that maps layer errors to HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    let status: StatusCode = if find_cause::<LengthLimitError>(&*err).is_some() {
        // ! 413 if the body was too large
        StatusCode::PAYLOAD_TOO_LARGE
    } else if err.is::<Elapsed>() {
        // ! 408 if the request took too long
        StatusCode::REQUEST_TIMEOUT
    } else {
        // ! Otherwise, 500
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let body: ErrorBody = ErrorBody {
        code: status.as_u16(),
        error: err.to_string(),
    };

    match to_two_space_indented_json(&body) {
        Ok(spaced_json) => error!("\nLayer error:\n{}", spaced_json),
        Err(err) => error!("Failed to format error body as JSON: {:?}", err),
    }

    (status, Json(body))
}

// * A small helper function to find a specific cause in a chain of errors
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

// End of file: /src/shared/error_handler/mod.rs
