use crate::summarizer::Summary;

/// Where one service's run through the pipeline ended up.
#[derive(Debug, Clone)]
pub enum ServiceOutcome {
    /// No pod in the namespace matched the service name.
    PodNotFound,
    /// The pod produced no log output inside the lookback window.
    NoLogs,
    /// The summarization endpoint rejected the request or was unreachable.
    SummarizationFailed(String),
    Summarized(Summary),
}

#[derive(Debug, Clone)]
pub struct ServiceReport {
    pub service: String,
    pub pod: Option<String>,
    pub outcome: ServiceOutcome,
}
