//! SSH tail channel — out-of-band fallback when the hub API is down.
//!
//! Spawns `ssh` with a structurally built argv (no shell interpretation)
//! and tails the remote log file. Tail length is capped in config to keep
//! the transfer bounded.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

use vg_diag::fetch::LogChannel;
use vg_diag::{DiagError, DiagResult};

use crate::config::SshConfig;

pub struct SshTailChannel {
    config: SshConfig,
}

impl SshTailChannel {
    pub fn new(config: SshConfig) -> Self {
        Self { config }
    }

    fn build_args(&self) -> Vec<String> {
        let c = &self.config;
        let mut args = vec![
            "-p".to_string(),
            c.port.to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=no".to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", c.connect_timeout_secs),
        ];
        if let Some(key) = &c.key_path {
            args.push("-i".to_string());
            args.push(key.display().to_string());
        }
        args.push(format!("{}@{}", c.user, c.host));
        args.push(format!("tail -n {} {}", c.tail_lines, c.log_path));
        args
    }
}

#[async_trait]
impl LogChannel for SshTailChannel {
    fn name(&self) -> &str {
        "ssh-tail"
    }

    async fn fetch_log(&self) -> DiagResult<String> {
        let args = self.build_args();
        tracing::info!(host = %self.config.host, "attempting ssh log fetch");

        let result = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            Command::new("ssh").args(&args).output(),
        )
        .await;

        let output = match result {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(DiagError::Io(format!("ssh: {e}"))),
            Err(_) => return Err(DiagError::Timeout(self.config.timeout_secs)),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DiagError::Transport(format!(
                "ssh exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
