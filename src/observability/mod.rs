//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events and spans; installing a
//! subscriber is left to the embedding binary. [`init_tracing`] installs a
//! formatted subscriber writing to stderr, so HTML written to stdout stays
//! clean.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. The `trace_level` argument (e.g. `--trace-level debug` on the CLI)
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use cardgallery::observability::init_tracing;
//!
//! init_tracing(Some("debug"));
//!
//! tracing::debug!("gallery tracing active");
//! ```

mod init;

pub use init::init_tracing;
