use std::time::Duration;

use crate::cli::Cli;

/// Immutable run configuration, built once at startup and passed by
/// reference into every pipeline stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub namespace: String,
    /// Services to process, in order.
    pub services: Vec<String>,
    /// Optional container filter for multi-container pods.
    pub container: Option<String>,
    pub kubectl_binary: String,
    pub tail_lines: u32,
    /// Lookback window, passed verbatim to the log retrieval call.
    pub since: String,
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            namespace: cli.namespace.clone(),
            services: cli.services.clone(),
            container: cli.container.clone(),
            kubectl_binary: cli.kubectl.clone(),
            tail_lines: cli.tail,
            since: cli.since.clone(),
            api_url: cli.api_url.clone(),
            request_timeout: Duration::from_secs(cli.timeout),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            namespace: "auth-ns".to_string(),
            services: vec![
                "order-service".to_string(),
                "payment-service".to_string(),
                "auth-service".to_string(),
            ],
            container: None,
            kubectl_binary: "kubectl".to_string(),
            tail_lines: 50,
            since: "5m".to_string(),
            api_url: "http://127.0.0.1:8000/summarize".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
