//! Observability (structured logging)
//!
//! Every pipeline stage reports through `tracing`; this module installs the
//! subscriber that prints those events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset and verbose output was requested
const VERBOSE_FILTER: &str = "debug,panelgen=trace";

/// Default filter when `RUST_LOG` is unset
const QUIET_FILTER: &str = "info";

/// Initialize logging
///
/// Sets up:
/// - Structured logging with JSON formatting (production) or pretty formatting (dev)
/// - Environment-based log level filtering through `RUST_LOG`
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use panelgen::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Generator started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with_verbosity(cfg!(debug_assertions))
}

/// Initialize logging with an explicit default verbosity
///
/// `RUST_LOG` still takes precedence when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with_verbosity(verbose: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}

const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "debug,panelgen=trace");
        assert_eq!(default_filter(false), "info");
    }

    #[test]
    fn test_second_init_fails() {
        // The first call may race with other tests installing a subscriber
        let _ = init_with_verbosity(false);
        assert!(init_with_verbosity(false).is_err());
    }
}
