//! Raw log fetching with primary/fallback channel orchestration.

use async_trait::async_trait;

use crate::error::DiagResult;

/// A transport that can produce raw hub log text.
///
/// Concrete channels (hub HTTP API, SSH tail) live in the agent crate;
/// tests use [`crate::mock::MockChannel`]. Each channel owns its own
/// timeout — by the time a call returns it has definitively succeeded or
/// failed.
#[async_trait]
pub trait LogChannel: Send + Sync {
    /// Channel name for logging (e.g. "hub-api", "ssh-tail").
    fn name(&self) -> &str;

    /// Fetch the raw log text.
    async fn fetch_log(&self) -> DiagResult<String>;
}

/// Tries the primary channel, then the optional fallback, sequentially.
///
/// The fallback is attempted only after the primary has definitively
/// failed, never raced — a degraded hub shouldn't see duplicate load. If
/// everything fails the run proceeds with empty text: no data is not an
/// error, it renders an All Clear packet by construction.
pub struct FetchOrchestrator {
    primary: Box<dyn LogChannel>,
    fallback: Option<Box<dyn LogChannel>>,
}

impl FetchOrchestrator {
    pub fn new(primary: Box<dyn LogChannel>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn LogChannel>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Obtain raw log text for one run. Infallible.
    pub async fn fetch(&self) -> String {
        if let Some(text) = try_channel(&*self.primary).await {
            return text;
        }

        match &self.fallback {
            Some(fallback) => {
                if let Some(text) = try_channel(&**fallback).await {
                    return text;
                }
            }
            None => tracing::debug!("no fallback channel configured"),
        }

        tracing::warn!("all channels failed, proceeding with empty log text");
        String::new()
    }
}

async fn try_channel(channel: &dyn LogChannel) -> Option<String> {
    match channel.fetch_log().await {
        Ok(text) if !text.trim().is_empty() => {
            tracing::info!(channel = channel.name(), bytes = text.len(), "log fetched");
            Some(text)
        }
        Ok(_) => {
            tracing::warn!(channel = channel.name(), "channel returned no usable text");
            None
        }
        Err(e) => {
            tracing::warn!(channel = channel.name(), error = %e, "log fetch failed");
            None
        }
    }
}
