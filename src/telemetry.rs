//! Log subscriber setup and span constructors.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// when a global subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format {
        LogFormat::Pretty => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}

/// Standardized span constructors.
pub mod spans {
    use steam_social_proto::{MessageKind, SteamId};
    use tracing::{Span, debug_span};

    /// Span around the dispatch of one inbound message.
    pub fn dispatch(kind: MessageKind) -> Span {
        debug_span!("dispatch", kind = kind.as_str())
    }

    /// Span around an outbound action.
    pub fn action(name: &'static str, target: Option<SteamId>) -> Span {
        if let Some(target) = target {
            debug_span!("action", action = name, target = %target)
        } else {
            debug_span!("action", action = name)
        }
    }
}
