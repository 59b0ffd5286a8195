use tracing::{debug, warn};

use crate::config::Config;
use crate::exec::CommandExecutor;

/// Find the pod backing a service by listing pods in the configured
/// namespace and taking the first row that mentions the service name.
///
/// Matching is substring over the whole listing row (the equivalent of
/// `kubectl get pods | grep <service>`), so a service whose name appears
/// inside another service's pod names can resolve to the wrong pod. First
/// match wins.
pub async fn resolve_pod(
    executor: &dyn CommandExecutor,
    config: &Config,
    service: &str,
) -> Option<String> {
    let args = vec![
        "get".to_string(),
        "pods".to_string(),
        "-n".to_string(),
        config.namespace.clone(),
        "--no-headers".to_string(),
    ];

    let output = match executor.run(&args).await {
        Ok(output) => output,
        Err(err) => {
            warn!(
                "Failed to list pods in namespace {}: {}",
                config.namespace, err
            );
            return None;
        }
    };

    if !output.success {
        warn!(
            "Pod listing in namespace {} failed: {}",
            config.namespace,
            output.stderr.trim()
        );
        return None;
    }

    output
        .stdout
        .lines()
        .find(|line| line.contains(service))
        .and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
}

/// Fetch recent logs from a pod, bounded by the configured tail-line count
/// and lookback window. Returns `None` when the command fails or produces
/// only whitespace; the driver treats that as "nothing to summarize".
pub async fn fetch_logs(
    executor: &dyn CommandExecutor,
    config: &Config,
    pod: &str,
) -> Option<String> {
    let mut args = vec![
        "logs".to_string(),
        pod.to_string(),
        "-n".to_string(),
        config.namespace.clone(),
        "--tail".to_string(),
        config.tail_lines.to_string(),
        "--since".to_string(),
        config.since.clone(),
    ];

    if let Some(container) = &config.container {
        args.push("-c".to_string());
        args.push(container.clone());
    }

    let output = match executor.run(&args).await {
        Ok(output) => output,
        Err(err) => {
            warn!("Failed to fetch logs for pod {}: {}", pod, err);
            return None;
        }
    };

    if !output.success {
        warn!(
            "Log retrieval for pod {} failed: {}",
            pod,
            output.stderr.trim()
        );
        return None;
    }

    if output.stdout.trim().is_empty() {
        debug!(
            "Pod {} produced no output in the last {}",
            pod, config.since
        );
        return None;
    }

    Some(output.stdout)
}
