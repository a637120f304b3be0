use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Convert a ServerError into a JSON error response with the right status.
/// The consumer is the mobile client, which shows `error` verbatim in a
/// notification, so the message has to stand on its own.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),
        ServerError::BadRequest(msg) => render_error(400, &msg),
        ServerError::Conflict(msg) => render_error(409, &msg),
        ServerError::BackendError(msg) => {
            render_error(502, &format!("Listings backend error: {msg}"))
        }
        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Build a JSON error body
pub fn render_error(status: u16, message: &str) -> Response {
    let body = serde_json::to_vec(&ErrorBody { error: message })
        .unwrap_or_else(|_| br#"{"error":"Internal Server Error"}"#.to_vec());

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::new(body))
        .unwrap()
}
