use std::net::Ipv4Addr;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;

use crate::error::Error;
use crate::router::types::InterfacesInfo;

const INTERFACES_PATH: &str = "/api/interfaces/overview/interfacesInfo";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RouterConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_secret: String,
    pub verify_tls: bool,
}

pub struct RouterClient {
    config: RouterConfig,
    client: Client,
}

impl RouterClient {
    pub fn new(config: RouterConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn interfaces_info(&self) -> Result<InterfacesInfo, Error> {
        let url = format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            INTERFACES_PATH
        );
        debug!("Requesting {url}");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Transport(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }

    /// Public IPv4 address of the wan interface: the first entry in the
    /// row's address list that parses, in list order.
    pub async fn fetch_public_ip(&self) -> Result<Ipv4Addr, Error> {
        let info = self.interfaces_info().await?;
        let wan = info
            .rows
            .iter()
            .find(|row| row.identifier.as_deref() == Some("wan"))
            .ok_or_else(|| Error::NotFound("no wan interface in response".to_string()))?;

        for entry in &wan.ipv4 {
            let Some(candidate) = entry.address() else {
                continue;
            };
            match parse_ipv4(candidate) {
                Ok(addr) => {
                    info!("Public IP found: {addr}");
                    return Ok(addr);
                }
                Err(_) => warn!("Invalid IP format: {candidate}"),
            }
        }

        Err(Error::NotFound(
            "public IP not found on wan interface".to_string(),
        ))
    }
}

fn parse_ipv4(candidate: &str) -> Result<Ipv4Addr, Error> {
    candidate
        .parse()
        .map_err(|_| Error::Validation(format!("not an IPv4 address: {candidate}")))
}
