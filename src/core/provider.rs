use crate::core::record::DnsRecord;
use crate::error::Error;
use async_trait::async_trait;
use std::net::Ipv4Addr;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch_record(&self, record_name: &str) -> Result<DnsRecord, Error>;
    async fn update_record(
        &self,
        record_id: &str,
        record_name: &str,
        address: Ipv4Addr,
    ) -> Result<(), Error>;
}
