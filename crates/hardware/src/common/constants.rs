//! Global Core Constants.
//!
//! This module defines constants shared by the decoder, datapath and harness. It includes:
//! 1. **Architectural Constants:** Register count and datapath width.
//! 2. **Field Widths:** Immediate field widths for the I-type and L-type formats.
//! 3. **Harness Constants:** Reset hold time used by the simulator wrapper.

/// Number of architectural registers (`x0`-`x7`).
pub const NUM_REGS: usize = 8;

/// Width of the datapath and of every register, in bits.
pub const XLEN: u32 = 8;

/// Width of the I-type immediate field (bits 12:8 of the instruction word).
pub const I_IMM_BITS: u32 = 5;

/// Width of the L-type immediate field (the whole high byte).
pub const L_IMM_BITS: u32 = 8;

/// Mask applied to every shift amount; shifts are taken modulo 8.
pub const SHAMT_MASK: u8 = 0x7;

/// Number of clock cycles reset is held low, then released, by the harness.
pub const RESET_HOLD_CYCLES: u32 = 10;
