//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name reported in trace files.
const SERVICE_NAME: &str = "MoodJournal";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "mood-journal-otlp.json";

/// Installs the global tracing subscriber.
///
/// Two optional layers:
/// - OTLP file export to `<data_dir>/mood-journal-otlp.json`, when
///   `config.trace_level` is set
/// - human-readable output on stderr, when `verbose` is set
///
/// With neither, no subscriber is installed and tracing stays disabled.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. `"debug"` when verbose
///
/// # Initialization Behavior
///
/// - Creates the data directory if needed; if that fails file export is skipped
/// - Only the first call takes effect
pub fn init_tracing(config: &Config, verbose: bool) {
    if config.trace_level.is_none() && !verbose {
        return;
    }

    let level = config.trace_level.clone().unwrap_or_else(|| "debug".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let otel_layer = config.trace_level.as_ref().and_then(|_| {
        let data_dir = config.resolved_data_dir();
        std::fs::create_dir_all(&data_dir).ok()?;

        let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
        let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
        Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
    });

    let fmt_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(fmt_layer)
        .try_init();
}
