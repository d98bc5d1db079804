//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `<data_dir>/mood-journal-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Console Output**: Optional human-readable stderr layer (`--verbose`)
//!
//! # Usage
//!
//! ```rust,no_run
//! use mood_journal::observability::init_tracing;
//! use mood_journal::Config;
//!
//! let config = Config {
//!     trace_level: Some("debug".to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config, false);
//!
//! tracing::debug!("tracing is now active");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
