//! OPNsense router client

pub mod client;
pub mod types;

pub use client::{RouterClient, RouterConfig};

use crate::core::source::IpSource;
use crate::error::Error;
use async_trait::async_trait;
use std::net::Ipv4Addr;

#[async_trait]
impl IpSource for RouterClient {
    async fn current_ip(&self) -> Result<Ipv4Addr, Error> {
        self.fetch_public_ip().await
    }
}
