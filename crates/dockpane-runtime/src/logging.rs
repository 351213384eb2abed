use dockpane_plugin::{LogLevel, LogSink};
use tracing_subscriber::EnvFilter;

/// Log sink forwarding extension logs to the `tracing` ecosystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "dockpane", "{}", message),
            LogLevel::Debug => tracing::debug!(target: "dockpane", "{}", message),
            LogLevel::Info => tracing::info!(target: "dockpane", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "dockpane", "{}", message),
            LogLevel::Error => tracing::error!(target: "dockpane", "{}", message),
        }
    }
}

/// Initialise logging. The default level is `info`; `RUST_LOG` overrides it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
