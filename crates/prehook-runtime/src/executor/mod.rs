//! Hook executor backed by `tokio::process`.

mod command;

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use prehook_core::{ExecError, ExecOutput, HookExecutor, HookInvocation, RunnerSettings};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::process::{SHUTDOWN_GRACE, kill_process_group, shutdown_child};
use command::{resolve_program, split_entry};

/// Runs each invocation as a child process of the project root.
///
/// The command line is the entry's program and arguments, then the hook's
/// `args`, then the batch of filenames. Stdout and stderr are captured and
/// returned as one string (stdout first).
#[derive(Debug, Clone)]
pub struct ProcessHookExecutor {
    timeout: Duration,
    grace: Duration,
}

impl ProcessHookExecutor {
    /// Create an executor with a per-invocation timeout.
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            grace: SHUTDOWN_GRACE,
        }
    }

    /// Create an executor using the configured hook timeout.
    pub const fn from_settings(settings: &RunnerSettings) -> Self {
        Self::new(Duration::from_secs(settings.effective_hook_timeout_secs()))
    }

    /// Override the SIGTERM grace period used when a hook times out.
    #[must_use]
    pub const fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }
}

fn spawn_reader<R>(stream: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut stream) = stream {
            if let Err(e) = stream.read_to_end(&mut buf).await {
                debug!(error = %e, "Stopped reading hook output");
            }
        }
        buf
    })
}

#[async_trait]
impl HookExecutor for ProcessHookExecutor {
    async fn execute(&self, invocation: &HookInvocation) -> Result<ExecOutput, ExecError> {
        let words = split_entry(&invocation.entry)?;
        let (program, entry_args) = words
            .split_first()
            .ok_or_else(|| ExecError::InvalidEntry {
                entry: invocation.entry.clone(),
                reason: "entry is empty".to_string(),
            })?;

        let program = resolve_program(
            program,
            &invocation.language,
            invocation.repo_path.as_deref(),
            &invocation.work_dir,
        )?;

        if !invocation.additional_dependencies.is_empty() {
            debug!(
                hook = %invocation.hook_id,
                deps = ?invocation.additional_dependencies,
                "Additional dependencies are expected in the hook environment"
            );
        }

        let mut cmd = Command::new(&program);
        cmd.args(entry_args)
            .args(&invocation.args)
            .args(&invocation.files)
            .current_dir(&invocation.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);

        debug!(
            hook = %invocation.hook_id,
            program = %program.display(),
            files = invocation.files.len(),
            "Spawning hook"
        );

        let mut child = cmd.spawn().map_err(|e| ExecError::SpawnFailed {
            program: program.display().to_string(),
            reason: e.to_string(),
        })?;

        let pid = child.id();
        let mut stdout = spawn_reader(child.stdout.take());
        let mut stderr = spawn_reader(child.stderr.take());

        // Reader joins count against the timeout: a backgrounded grandchild
        // keeps the pipes open after the hook itself exits.
        let collected = timeout(self.timeout, async {
            let status = child.wait().await?;
            let mut output = (&mut stdout).await.unwrap_or_default();
            output.extend((&mut stderr).await.unwrap_or_default());
            Ok::<_, std::io::Error>((status, output))
        })
        .await;

        let (status, output) = match collected {
            Ok(result) => result.map_err(|e| ExecError::Io(e.to_string()))?,
            Err(_) => {
                warn!(
                    hook = %invocation.hook_id,
                    timeout_secs = self.timeout.as_secs(),
                    "Hook timed out, shutting it down"
                );
                if let Err(e) = shutdown_child(child, self.grace).await {
                    warn!(hook = %invocation.hook_id, error = %e, "Failed to stop hook process");
                }
                if let Some(pid) = pid {
                    kill_process_group(pid);
                }
                stdout.abort();
                stderr.abort();
                return Err(ExecError::TimedOut(self.timeout.as_secs()));
            }
        };

        Ok(ExecOutput::new(
            status.code(),
            String::from_utf8_lossy(&output).into_owned(),
        ))
    }
}
