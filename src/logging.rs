//! Console and Sentry logging.

use std::borrow::Cow;
use std::time::Duration as StdDuration;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

/// Filter of one logging layer: directives from the environment or the default.
struct FilterSource {
    variable: &'static str,
    default: &'static str,
}

const CONSOLE_FILTER: FilterSource = FilterSource {
    variable: "PORTFOLIO_LOG",
    default: "portfolio=info",
};

const SENTRY_FILTER: FilterSource = FilterSource {
    variable: "PORTFOLIO_SENTRY_LOG",
    default: "portfolio=debug",
};

impl FilterSource {
    fn build(&self) -> Result<EnvFilter> {
        let directives = std::env::var(self.variable).ok();
        let directives = directives.as_deref().unwrap_or(self.default);
        EnvFilter::try_new(directives)
            .with_context(|| format!("invalid `{}` directives: {:?}", self.variable, directives))
    }
}

/// Sets up the console output and, given a DSN, the Sentry reporting.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            environment: Some(Cow::Borrowed(environment())),
            attach_stacktrace: true,
            traces_sample_rate,
            ..Default::default()
        },
    ));

    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| sentry_event_filter(*metadata.level()))
        .span_filter(|metadata| *metadata.level() <= Level::INFO)
        .with_filter(SENTRY_FILTER.build()?);
    let console_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(CONSOLE_FILTER.build()?);

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}

const fn environment() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}

/// Warnings and errors are reported as Sentry events, the rest only as breadcrumbs.
fn sentry_event_filter(level: Level) -> EventFilter {
    if level <= Level::WARN {
        EventFilter::Event
    } else {
        EventFilter::Breadcrumb
    }
}

pub fn format_duration(duration: StdDuration) -> String {
    humantime::format_duration(duration).to_string()
}

pub fn format_elapsed(instant: Instant) -> String {
    format_duration(instant.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentry_event_filter_ok() {
        assert!(matches!(sentry_event_filter(Level::ERROR), EventFilter::Event));
        assert!(matches!(sentry_event_filter(Level::WARN), EventFilter::Event));
        assert!(matches!(sentry_event_filter(Level::INFO), EventFilter::Breadcrumb));
        assert!(matches!(sentry_event_filter(Level::TRACE), EventFilter::Breadcrumb));
    }

    #[test]
    fn filter_falls_back_to_default_ok() -> crate::Result {
        let source = FilterSource {
            variable: "PORTFOLIO_UNSET_LOG_VARIABLE",
            default: "portfolio=debug",
        };
        assert_eq!(source.build()?.to_string(), "portfolio=debug");
        Ok(())
    }

    #[test]
    fn format_duration_ok() {
        assert_eq!(format_duration(StdDuration::from_millis(1500)), "1s 500ms");
    }
}
