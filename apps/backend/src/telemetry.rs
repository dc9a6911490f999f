use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when RUST_LOG is unset. Auction mutations log at info
/// from this crate; the ORM and driver layers only surface warnings.
const DEFAULT_DIRECTIVES: &str = "info,backend=info,sea_orm=warn,sqlx=warn";

pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    // One JSON object per line with fields at the top level, for log
    // shippers that key on `trace_id`.
    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(true)
        .with_current_span(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
