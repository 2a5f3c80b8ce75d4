use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::providers::cloudflare::error::CloudflareError;
use crate::providers::cloudflare::types::{ApiError, ApiResponse, CloudflareRecord, UpdateRecordRequest};

pub const DEFAULT_API_URL: &str = "https://api.cloudflare.com/client/v4";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CloudflareConfig {
    pub api_url: String,
    pub zone_id: String,
}

pub struct CloudflareProvider {
    config: CloudflareConfig,
    client: Client,
    api_token: String,
}

impl CloudflareProvider {
    pub fn new(config: CloudflareConfig, api_token: String) -> Result<Self, CloudflareError> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self {
            config,
            client,
            api_token,
        })
    }

    async fn handle_request<T, F>(&self, fut: F) -> Result<T, CloudflareError>
    where
        F: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
        T: serde::de::DeserializeOwned,
    {
        let response = fut.await?;

        match response.status() {
            StatusCode::OK => {
                let body: ApiResponse<T> = response.json().await?;
                if !body.success {
                    return Err(first_api_error(body.errors));
                }
                body.result.ok_or_else(|| {
                    CloudflareError::UnexpectedResponse("missing result".to_string())
                })
            }
            status => match response.json::<ApiResponse<T>>().await {
                Ok(body) if !body.errors.is_empty() => Err(first_api_error(body.errors)),
                _ => Err(CloudflareError::UnexpectedResponse(format!(
                    "status {status}"
                ))),
            },
        }
    }

    pub async fn list_records(&self) -> Result<Vec<CloudflareRecord>, CloudflareError> {
        let url = format!(
            "{}/zones/{}/dns_records",
            self.config.api_url, self.config.zone_id
        );
        debug!("Requesting {url}");
        self.handle_request(self.client.get(url).bearer_auth(&self.api_token).send())
            .await
    }

    pub async fn put_record(
        &self,
        record_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<CloudflareRecord, CloudflareError> {
        let url = format!(
            "{}/zones/{}/dns_records/{}",
            self.config.api_url, self.config.zone_id, record_id
        );
        debug!("Requesting {url}");
        self.handle_request(
            self.client
                .put(url)
                .bearer_auth(&self.api_token)
                .json(req)
                .send(),
        )
        .await
    }
}

fn first_api_error(errors: Vec<ApiError>) -> CloudflareError {
    match errors.into_iter().next() {
        Some(err) => err.into(),
        None => CloudflareError::UnexpectedResponse("missing result".to_string()),
    }
}
