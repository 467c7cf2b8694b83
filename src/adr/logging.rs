//! Tracing subscriber setup for the binary.
//!
//! Library code only emits `tracing` events; nothing is printed unless the
//! binary installs a subscriber here. Events go to stderr so they never mix with
//! command output.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ADR_LOG";

static INIT_ONCE: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "adr=debug"
    } else {
        "adr=warn"
    }
}

/// Install the global subscriber. `ADR_LOG` takes precedence over `verbose`.
/// Calling this more than once is harmless.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        // Fails only if another subscriber is already installed.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directive(false), "adr=warn");
        assert_eq!(default_directive(true), "adr=debug");
    }
}
