//! Common utilities and types used throughout the core model.
//!
//! This module provides the building blocks shared by the decoder, datapath and
//! simulator. It includes:
//! 1. **Constants:** Register count, field widths and harness timing defaults.
//! 2. **Error Handling:** Typed errors for the assembler, loader and configuration.
//! 3. **Register Indices:** A checked newtype for the 3-bit register selectors.

/// Common constants used throughout the model.
pub mod constants;

/// Error types for assembly, loading and configuration.
pub mod error;

/// Register index type.
pub mod reg;

pub use constants::{NUM_REGS, SHAMT_MASK};
pub use error::{Error, ParseError};
pub use reg::Reg;
