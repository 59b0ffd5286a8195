mod cli;
mod config;
mod driver;
mod exec;
mod kubernetes;
mod summarizer;
#[cfg(test)]
mod tests;
mod types;

use clap::Parser;
use tracing::{debug, info};

use cli::Cli;
use config::Config;
use exec::KubectlExecutor;
use summarizer::HttpSummarizer;
use types::ServiceOutcome;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the summaries
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli(&cli);
    let executor = KubectlExecutor::new(&config.kubectl_binary);
    let summarizer = HttpSummarizer::new(&config.api_url, config.request_timeout)?;

    info!(
        "Feeding pod logs from namespace {} to {}",
        config.namespace, config.api_url
    );

    let reports = driver::run(&config, &executor, &summarizer).await;

    for report in &reports {
        match &report.outcome {
            ServiceOutcome::Summarized(summary) => {
                println!("\nSummary for {}:", report.service);
                println!("{}", summary.text());
                println!("{}", "-".repeat(60));
                if !summary.extra.is_empty() {
                    debug!(
                        "Extra fields from endpoint for {}: {:?}",
                        report.service, summary.extra
                    );
                }
            }
            ServiceOutcome::PodNotFound => {
                println!("\n{}: no matching pod", report.service);
            }
            ServiceOutcome::NoLogs => {
                println!(
                    "\n{}: no recent logs from pod {}",
                    report.service,
                    report.pod.as_deref().unwrap_or("?")
                );
            }
            ServiceOutcome::SummarizationFailed(err) => {
                println!("\n{}: summarization failed: {}", report.service, err);
            }
        }
    }

    info!("Done processing {} services", reports.len());

    // Per-service failures were already reported; the run itself succeeds
    Ok(())
}
