//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → JSON lines
//! ```
//!
//! The level comes from the `trace_level` configuration option (default
//! `"info"`). Trace files rotate by size and keep a few backups.
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider and OTLP JSON export
//! - `file_writer`: Rotating line writer

mod file_writer;
mod init;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
