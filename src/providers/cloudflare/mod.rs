//! Cloudflare DNS provider implementation

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::{CloudflareConfig, CloudflareProvider, DEFAULT_API_URL};
pub use error::CloudflareError;

use crate::core::provider::DnsProvider;
use crate::core::record::DnsRecord;
use crate::error::Error;
use async_trait::async_trait;
use error::map_error;
use std::net::Ipv4Addr;
use types::{CloudflareRecord, UpdateRecordRequest};

fn to_dns_record(record: &CloudflareRecord) -> DnsRecord {
    DnsRecord {
        id: record.id.clone(),
        name: record.name.clone(),
        content: record.content.clone(),
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn name(&self) -> &str {
        "cloudflare"
    }

    async fn fetch_record(&self, record_name: &str) -> Result<DnsRecord, Error> {
        let records = self.list_records().await.map_err(map_error)?;
        records
            .iter()
            .map(to_dns_record)
            .find(|record| record.matches_name(record_name))
            .ok_or_else(|| Error::NotFound(format!("no record matching {record_name} in zone")))
    }

    async fn update_record(
        &self,
        record_id: &str,
        record_name: &str,
        address: Ipv4Addr,
    ) -> Result<(), Error> {
        let req = UpdateRecordRequest::a_record(record_name, &address.to_string());
        self.put_record(record_id, &req)
            .await
            .map(|_| ())
            .map_err(map_error)
    }
}
