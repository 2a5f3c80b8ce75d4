use clap::Parser;

const LONG_ABOUT: &str = "\
Fetches the public IP from an OPNsense router and updates Cloudflare DNS \
records if needed.

To enable the OPNsense API:
  1. Log in to OPNsense and go to System > Access > Users.
  2. Create an API key and enable the REST API in System > Settings > Administration.
  3. Use HTTPS for API access.

To generate a Cloudflare API token:
  1. Go to https://dash.cloudflare.com/profile/api-tokens.
  2. Create a token with Edit permissions for DNS records.";

#[derive(Parser)]
#[command(
    name = "opnsense-ddns",
    about = "Sync Cloudflare DNS records with an OPNsense router's public IP",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// OPNsense router URL (e.g. https://192.168.1.1)
    #[arg(long)]
    pub opnsense_url: String,

    /// OPNsense API key
    #[arg(long)]
    pub api_key: String,

    /// OPNsense API secret
    #[arg(long)]
    pub api_secret: String,

    /// Cloudflare Zone ID
    #[arg(long)]
    pub zone_id: String,

    /// Cloudflare DNS record names (not including domain name)
    #[arg(long, required = true, num_args = 1..)]
    pub record_name: Vec<String>,

    /// Cloudflare API token
    #[arg(long)]
    pub api_token: String,

    /// Skip TLS certificate verification for the router API
    #[arg(long)]
    pub insecure: bool,
}
