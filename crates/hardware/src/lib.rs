//! 8-bit ALU core behavioral model.
//!
//! This crate models a small instruction-driven 8-bit core observed through its
//! pins: two 8-bit input buses carry a 16-bit instruction word, one 8-bit output
//! bus shows the result of the current cycle. It provides the following:
//! 1. **ISA:** Field layout, decoding, the closed operation set, assembler and disassembler.
//! 2. **Core:** Eight-entry register file with hardwired `x0`, ALU, comparator and result multiplexer.
//! 3. **Pins:** A clocked core with enable and active-low reset.
//! 4. **Simulation:** A pin-driving simulator, per-cycle traces, program loading and statistics.
//!
//! # Example
//!
//! ```
//! use alu8_core::Simulator;
//! use alu8_core::isa::asm::parse_program;
//!
//! let program = parse_program("load x2, 3\nload x3, 6\nsub x7, x2, x3\nstore x7").unwrap();
//! let mut sim = Simulator::default();
//! sim.apply_reset();
//! let trace = sim.run(&program);
//! assert_eq!(trace[3].output, -3);
//! ```

/// Common types and constants (register indices, errors).
pub mod common;
/// Configuration (defaults, enums, JSON loading).
pub mod config;
/// Core datapath (register file, units, control signals, pin-level core).
pub mod core;
/// Instruction set (encoding tables, decode, operations, assembler, disassembler).
pub mod isa;
/// Simulator, traces and program loading.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The pin-level core.
pub use crate::core::Cpu;
/// Instruction type.
pub use crate::isa::Op;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::default`.
pub use crate::sim::Simulator;
