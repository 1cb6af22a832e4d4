//! Hub HTTP API channel — primary log transport plus system snapshot.

use async_trait::async_trait;
use std::time::Duration;

use vg_diag::fetch::LogChannel;
use vg_diag::{DiagError, DiagResult, SystemSnapshot};

use crate::config::HubConfig;

/// Client for the hub REST API.
///
/// Cloneable: the underlying `reqwest::Client` is shared, so one instance
/// can sit in the fetch orchestrator while another serves snapshots.
#[derive(Clone)]
pub struct HubApiChannel {
    client: reqwest::Client,
    base_url: String,
    token: String,
    timeout_secs: u64,
}

impl HubApiChannel {
    pub fn new(config: &HubConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            timeout_secs: config.timeout_secs,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(&self.token)
    }

    /// Fetch `/api/config` for the report's system snapshot.
    ///
    /// Any failure degrades to an "unreachable" snapshot — the snapshot is
    /// decoration on the report and must never abort a run.
    pub async fn system_snapshot(&self) -> SystemSnapshot {
        let response = match self.get("/api/config").send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "hub config fetch failed");
                return SystemSnapshot::unreachable();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "hub config returned non-success");
            return SystemSnapshot::unreachable();
        }

        match response.json::<SystemSnapshot>().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse hub config");
                SystemSnapshot::unreachable()
            }
        }
    }
}

#[async_trait]
impl LogChannel for HubApiChannel {
    fn name(&self) -> &str {
        "hub-api"
    }

    async fn fetch_log(&self) -> DiagResult<String> {
        let response = self.get("/api/error_log").send().await.map_err(|e| {
            if e.is_timeout() {
                DiagError::Timeout(self.timeout_secs)
            } else {
                DiagError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiagError::Transport(format!("hub returned {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| DiagError::Transport(e.to_string()))
    }
}
