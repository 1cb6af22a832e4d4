//! Concrete log transport channels: hub HTTP API and SSH tail fallback.

pub mod http;
pub mod ssh;

pub use http::HubApiChannel;
pub use ssh::SshTailChannel;
