use serde::{Deserialize, Serialize};

pub const PROXY_ERROR: &str = "Proxy error";

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn proxy() -> Self {
        Self {
            error: PROXY_ERROR.to_string(),
        }
    }
}
