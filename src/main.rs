use clap::Parser;
use log::{error, info};
use std::process;

mod cli;
mod config;
mod core;
mod error;
mod providers;
mod reconciler;
mod router;

use crate::core::provider::DnsProvider;
use config::RunConfig;
use providers::cloudflare::{CloudflareConfig, CloudflareProvider, DEFAULT_API_URL};
use reconciler::Reconciler;
use router::{RouterClient, RouterConfig};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = RunConfig::from_cli(cli::Cli::parse());
    let RunConfig {
        opnsense_url,
        api_key,
        api_secret,
        zone_id,
        api_token,
        record_names,
        verify_tls,
    } = config;

    let source = match RouterClient::new(RouterConfig {
        endpoint: opnsense_url,
        api_key,
        api_secret,
        verify_tls,
    }) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build router client: {e}");
            process::exit(1);
        }
    };

    let provider = match CloudflareProvider::new(
        CloudflareConfig {
            api_url: DEFAULT_API_URL.to_string(),
            zone_id,
        },
        api_token,
    ) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to build DNS provider client: {e}");
            process::exit(1);
        }
    };

    info!(
        "Syncing {} record(s) via {}",
        record_names.len(),
        provider.name()
    );

    let reconciler = Reconciler::new(source, provider, record_names);
    match reconciler.run().await {
        Ok(report) => {
            info!(
                "Run complete: {} updated, {} already current, {} failed",
                report.updated(),
                report.unchanged(),
                report.failed()
            );
        }
        Err(e) => {
            error!("Failed to retrieve public IP: {e}");
            process::exit(1);
        }
    }
}
