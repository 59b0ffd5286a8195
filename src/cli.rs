use clap::Parser;

#[derive(Parser)]
#[command(name = "kubectl-summarize")]
#[command(about = "Feed recent pod logs to an AI summarization endpoint")]
pub struct Cli {
    /// Services to summarize, processed in the order given
    #[arg(default_values_t = [
        "order-service".to_string(),
        "payment-service".to_string(),
        "auth-service".to_string(),
    ])]
    pub services: Vec<String>,

    /// Namespace to look for pods in
    #[arg(short = 'n', long, default_value = "auth-ns")]
    pub namespace: String,

    /// Container name (if multi-container pod)
    #[arg(short = 'c', long)]
    pub container: Option<String>,

    /// Number of log lines to fetch per pod
    #[arg(long, default_value_t = 50)]
    pub tail: u32,

    /// Lookback window for log retrieval (kubectl duration, e.g. 5m, 1h)
    #[arg(long, default_value = "5m")]
    pub since: String,

    /// Summarization endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:8000/summarize")]
    pub api_url: String,

    /// Summarization request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// kubectl binary to invoke
    #[arg(long, default_value = "kubectl")]
    pub kubectl: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
