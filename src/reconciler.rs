use std::net::Ipv4Addr;

use log::{error, info};

use crate::core::provider::DnsProvider;
use crate::core::source::IpSource;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Updated { previous: String },
    AlreadyCurrent,
}

/// Per-record results of one reconciliation pass.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<(String, Result<RecordOutcome, Error>)>,
}

impl RunReport {
    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Ok(RecordOutcome::Updated { .. })))
            .count()
    }

    pub fn unchanged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, Ok(RecordOutcome::AlreadyCurrent)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .count()
    }
}

pub struct Reconciler<S: IpSource, P: DnsProvider> {
    source: S,
    provider: P,
    record_names: Vec<String>,
}

impl<S: IpSource, P: DnsProvider> Reconciler<S, P> {
    pub fn new(source: S, provider: P, record_names: Vec<String>) -> Self {
        Self {
            source,
            provider,
            record_names,
        }
    }

    /// One fetch-compare-update pass. Failing to determine the public
    /// address aborts the run; per-record failures do not.
    pub async fn run(&self) -> Result<RunReport, Error> {
        let address = self.source.current_ip().await?;

        let mut outcomes = Vec::with_capacity(self.record_names.len());
        for name in &self.record_names {
            let result = self.sync_record(name, address).await;
            match &result {
                Ok(RecordOutcome::Updated { previous }) => {
                    info!("Successfully updated DNS record for {name} ({previous} -> {address})");
                }
                Ok(RecordOutcome::AlreadyCurrent) => {
                    info!("DNS record for {name} is already up to date. No update needed.");
                }
                Err(e) => {
                    error!("Failed to sync DNS record for {name}: {e}");
                }
            }
            outcomes.push((name.clone(), result));
        }

        Ok(RunReport { outcomes })
    }

    async fn sync_record(&self, name: &str, address: Ipv4Addr) -> Result<RecordOutcome, Error> {
        let record = self.provider.fetch_record(name).await?;
        if record.content == address.to_string() {
            return Ok(RecordOutcome::AlreadyCurrent);
        }

        info!(
            "IP mismatch detected for {name}. Updating ({} -> {address})",
            record.content
        );
        self.provider.update_record(&record.id, name, address).await?;
        Ok(RecordOutcome::Updated {
            previous: record.content,
        })
    }
}
