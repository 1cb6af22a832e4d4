//! Agent configuration, loadable from TOML.
//!
//! Missing credentials are fatal here, before the pipeline starts — the
//! pipeline itself assumes it always receives either text or an explicit
//! failure from its channels.

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Hub API connection settings (primary log channel + snapshot).
    pub hub: HubConfig,
    /// SSH fallback channel. Absent → fallback silently skipped.
    #[serde(default)]
    pub ssh: Option<SshConfig>,
    /// Where report files and the diff state live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// REST bridge listen settings.
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// Hub REST API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    /// Base URL, e.g. "http://hub.local:8123".
    pub base_url: String,
    /// Long-lived access token.
    pub token: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_hub_timeout_secs")]
    pub timeout_secs: u64,
}

/// SSH tail fallback settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SshConfig {
    pub host: String,
    #[serde(default = "default_ssh_user")]
    pub user: String,
    #[serde(default = "default_ssh_port")]
    pub port: u16,
    /// Identity file. None lets ssh pick its defaults.
    #[serde(default)]
    pub key_path: Option<PathBuf>,
    /// Remote log file to tail.
    #[serde(default = "default_log_path")]
    pub log_path: String,
    /// Tail length — keeps the transfer bounded on chatty hubs.
    #[serde(default = "default_tail_lines")]
    pub tail_lines: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall command timeout in seconds.
    #[serde(default = "default_ssh_timeout_secs")]
    pub timeout_secs: u64,
}

/// REST bridge listen settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_bridge_host")]
    pub host: String,
    #[serde(default = "default_bridge_port")]
    pub port: u16,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/var/lib/vigil")
}

fn default_hub_timeout_secs() -> u64 {
    15
}

fn default_ssh_user() -> String {
    "root".to_string()
}

fn default_ssh_port() -> u16 {
    22
}

fn default_log_path() -> String {
    "/config/home-assistant.log".to_string()
}

fn default_tail_lines() -> u32 {
    2000
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_ssh_timeout_secs() -> u64 {
    15
}

fn default_bridge_host() -> String {
    "0.0.0.0".to_string()
}

fn default_bridge_port() -> u16 {
    5101
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: default_bridge_host(),
            port: default_bridge_port(),
        }
    }
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Path of the single state file used for run-over-run diffing.
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join("latest_state.json")
    }
}
