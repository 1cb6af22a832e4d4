//! Mock log channel for tests — serves a scripted response.

use async_trait::async_trait;

use crate::error::{DiagError, DiagResult};
use crate::fetch::LogChannel;

/// A [`LogChannel`] that returns a pre-loaded response.
pub struct MockChannel {
    name: String,
    response: Option<String>,
}

impl MockChannel {
    /// A channel that succeeds with the given text.
    pub fn ok(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: Some(text.into()),
        }
    }

    /// A channel that always fails with a transport error.
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: None,
        }
    }
}

#[async_trait]
impl LogChannel for MockChannel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_log(&self) -> DiagResult<String> {
        self.response
            .clone()
            .ok_or_else(|| DiagError::Transport(format!("{}: connection refused", self.name)))
    }
}

/// Sample hub log: one INFO noise line, one ERROR with a traceback, one
/// WARNING. Parses into exactly 2 entries (1 error, 1 warning).
pub fn sample_hub_log() -> String {
    [
        "2024-01-15 06:58:55.012 INFO (MainThread) [setup] Setup of domain light took 2.0 seconds",
        "2024-01-15 07:00:00.123 ERROR (MainThread) [zwave] Connection to controller lost",
        "Traceback (most recent call last):",
        "  File \"serial.py\", line 10, in read",
        "serial.SerialException: device disconnected",
        "2024-01-15 07:00:05.456 WARNING (MainThread) [sensor] Update took longer than scheduled",
    ]
    .join("\n")
}
