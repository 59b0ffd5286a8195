use tracing::{info, warn};

use crate::config::Config;
use crate::exec::CommandExecutor;
use crate::kubernetes::{fetch_logs, resolve_pod};
use crate::summarizer::Summarizer;
use crate::types::{ServiceOutcome, ServiceReport};

/// Run the resolve -> fetch -> summarize pipeline over every configured
/// service, strictly in list order. A failed stage ends that service's
/// iteration and never affects the others; the returned list always holds
/// one report per configured service.
pub async fn run(
    config: &Config,
    executor: &dyn CommandExecutor,
    summarizer: &dyn Summarizer,
) -> Vec<ServiceReport> {
    let mut reports = Vec::with_capacity(config.services.len());

    for service in &config.services {
        info!("Processing service: {}", service);

        let Some(pod) = resolve_pod(executor, config, service).await else {
            warn!("No pod found for {}", service);
            reports.push(ServiceReport {
                service: service.clone(),
                pod: None,
                outcome: ServiceOutcome::PodNotFound,
            });
            continue;
        };
        info!("Pod found: {}", pod);

        let Some(logs) = fetch_logs(executor, config, &pod).await else {
            warn!("No logs found for {}", service);
            reports.push(ServiceReport {
                service: service.clone(),
                pod: Some(pod),
                outcome: ServiceOutcome::NoLogs,
            });
            continue;
        };
        info!("Logs fetched, requesting summary for {}", service);

        let outcome = match summarizer.summarize(service, &logs).await {
            Ok(summary) => ServiceOutcome::Summarized(summary),
            Err(err) => {
                warn!("Summarization failed for {}: {:#}", service, err);
                ServiceOutcome::SummarizationFailed(format!("{:#}", err))
            }
        };

        reports.push(ServiceReport {
            service: service.clone(),
            pod: Some(pod),
            outcome,
        });
    }

    reports
}
