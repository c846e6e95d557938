use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Build a subscriber from a filter string. An invalid filter falls back to `debug` and the
/// parse error is handed back so it can be reported once logging is up.
#[must_use]
pub fn parse_log_level(level: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscriber(filter), parse_err)
}

pub fn get_subscriber(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

/// The filter to log with: `env` wins over `configured`, which wins over `info`.
#[must_use]
pub fn resolve_filter(env: Option<String>, configured: Option<&str>) -> String {
    env.or_else(|| configured.map(str::to_owned))
        .unwrap_or_else(|| "info".to_owned())
}

/// Install the global subscriber, filtered by `RUST_LOG` if set and `configured` otherwise.
/// Can only take effect once per process, so call it before doing any work.
pub fn setup_logging(configured: Option<&str>) {
    let level = resolve_filter(std::env::var("RUST_LOG").ok(), configured);
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to setup logging: {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log filter '{}', using debug: {}", level, err);
    }
}
