//! Simulation wrapper, tracing and program loading.
//!
//! Provides the harness-facing `Simulator`, which drives the core's pins one
//! clock at a time, the serializable per-cycle `TraceEntry`, and loaders for
//! assembly and hex programs.

/// Program loading from assembly or hex files.
pub mod loader;

/// Pin-driving simulator around the core.
pub mod simulator;

/// Per-cycle trace records.
pub mod trace;

pub use simulator::Simulator;
pub use trace::TraceEntry;
