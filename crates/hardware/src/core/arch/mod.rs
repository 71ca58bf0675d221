//! Architectural state.
//!
//! The only state that persists across cycles is the general-purpose register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
