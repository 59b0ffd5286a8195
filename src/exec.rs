use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Seam over external process invocation. The pipeline stages only see
/// `run(args) -> {success, stdout, stderr}`, so tests can substitute canned
/// output without a cluster.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run the command and capture its output. `Err` means the process
    /// could not be spawned; a non-zero exit is `Ok` with `success: false`.
    async fn run(&self, args: &[String]) -> anyhow::Result<CommandOutput>;
}

/// Executor that shells out to the `kubectl` binary. Cluster auth comes
/// from the ambient environment (kubeconfig), same as running kubectl by
/// hand.
pub struct KubectlExecutor {
    binary: String,
}

impl KubectlExecutor {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl CommandExecutor for KubectlExecutor {
    async fn run(&self, args: &[String]) -> anyhow::Result<CommandOutput> {
        debug!("Executing: {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{CommandExecutor, CommandOutput};

    impl CommandOutput {
        pub fn ok(stdout: &str) -> Self {
            Self {
                success: true,
                stdout: stdout.to_string(),
                stderr: String::new(),
            }
        }

        pub fn err(stderr: &str) -> Self {
            Self {
                success: false,
                stdout: String::new(),
                stderr: stderr.to_string(),
            }
        }
    }

    /// Executor fed with canned kubectl output. Records every invocation
    /// so tests can assert which calls the driver actually made.
    pub struct FakeExecutor {
        pod_list: CommandOutput,
        logs_by_pod: HashMap<String, CommandOutput>,
        pub calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeExecutor {
        pub fn new(pod_list: CommandOutput) -> Self {
            Self {
                pod_list,
                logs_by_pod: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_logs(mut self, pod: &str, output: CommandOutput) -> Self {
            self.logs_by_pod.insert(pod.to_string(), output);
            self
        }

        /// First argument of every recorded invocation, in order.
        pub fn subcommands(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|args| args[0].clone())
                .collect()
        }
    }

    #[async_trait]
    impl CommandExecutor for FakeExecutor {
        async fn run(&self, args: &[String]) -> anyhow::Result<CommandOutput> {
            self.calls.lock().unwrap().push(args.to_vec());

            match args.first().map(String::as_str) {
                Some("get") => Ok(self.pod_list.clone()),
                Some("logs") => Ok(self
                    .logs_by_pod
                    .get(&args[1])
                    .cloned()
                    .unwrap_or_else(|| CommandOutput::err("pod not found"))),
                other => anyhow::bail!("unexpected subcommand: {:?}", other),
            }
        }
    }
}
