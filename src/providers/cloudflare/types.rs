use serde::{Deserialize, Serialize};

/// Standard Cloudflare v4 response envelope.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    pub result: Option<T>,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CloudflareRecord {
    pub id: String,
    pub name: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct UpdateRecordRequest {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: bool,
}

impl UpdateRecordRequest {
    /// Full A-record replacement; ttl 1 is Cloudflare's "automatic".
    pub fn a_record(name: &str, content: &str) -> Self {
        Self {
            record_type: "A".to_string(),
            name: name.to_string(),
            content: content.to_string(),
            ttl: 1,
            proxied: false,
        }
    }
}
