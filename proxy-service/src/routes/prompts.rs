use crate::models::responses::ErrorResponse;
use crate::Backend;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

pub async fn relay_prompts(
    State(backend): State<Backend>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let relay_id = Uuid::new_v4();

    let body = match outbound_body(&headers, body) {
        Ok(body) => body,
        Err(status) => {
            warn!(%relay_id, "Refusing request body: {}", status);
            return error_response(status);
        }
    };

    info!(%relay_id, "Relaying prompt request to {}", backend.endpoint());

    match backend.relay(&body).await {
        Ok(data) => (StatusCode::OK, cors_headers(), Json(data)).into_response(),
        Err(e) => {
            error!(%relay_id, "Error proxying request: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// An absent body or a non-JSON content type goes out as `{}`. A JSON body
/// that is too large or does not parse is refused with the status to answer.
fn outbound_body(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Value, StatusCode> {
    let bytes = body.map_err(|rejection| rejection.status())?;

    if !is_json(headers) || bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(&bytes).map_err(|_| StatusCode::BAD_REQUEST)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn error_response(status: StatusCode) -> Response {
    (status, cors_headers(), Json(ErrorResponse::proxy())).into_response()
}

fn cors_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ),
    ]
}
