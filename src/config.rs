use crate::cli::Cli;

/// Immutable for the duration of one invocation.
#[derive(Clone)]
pub struct RunConfig {
    pub opnsense_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub zone_id: String,
    pub api_token: String,
    pub record_names: Vec<String>,
    pub verify_tls: bool,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Self {
        RunConfig {
            opnsense_url: cli.opnsense_url,
            api_key: cli.api_key,
            api_secret: cli.api_secret,
            zone_id: cli.zone_id,
            api_token: cli.api_token,
            record_names: cli.record_name,
            verify_tls: !cli.insecure,
        }
    }
}

pub(crate) mod mock {
    use super::*;

    impl Default for RunConfig {
        fn default() -> Self {
            RunConfig {
                opnsense_url: String::from("https://192.0.2.1"),
                api_key: String::from("key"),
                api_secret: String::from("secret"),
                zone_id: String::from("zone123"),
                api_token: String::from("token"),
                record_names: vec![String::from("home")],
                verify_tls: true,
            }
        }
    }
}
