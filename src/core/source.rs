use crate::error::Error;
use async_trait::async_trait;
use std::net::Ipv4Addr;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpSource: Send + Sync {
    async fn current_ip(&self) -> Result<Ipv4Addr, Error>;
}
