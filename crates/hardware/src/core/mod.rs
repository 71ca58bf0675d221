//! Core datapath.
//!
//! This module contains the register file, the execution units, the control
//! signals that steer them, and the pin-level core that ties them to the
//! input and output buses.

/// Architectural state (register file).
pub mod arch;

/// Pin-level core and single-cycle execution.
pub mod cpu;

/// Control signals (ALU op, operand and result selection).
pub mod signals;

/// Execution units (ALU, comparator).
pub mod units;

pub use self::cpu::{Cpu, Pins};
