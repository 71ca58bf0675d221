//! Simulator driving: sampling, enable, reset and traces.

use alu8_core::Simulator;
use alu8_core::common::Reg;
use alu8_core::config::Config;
use alu8_core::isa::RegOp;
use alu8_core::isa::asm::parse_program;
use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, x};

#[test]
fn reset_sequence_takes_twice_the_hold_time() {
    let ctx = TestContext::new();
    assert_eq!(ctx.sim.cycle(), 20);
    assert!(ctx.sim.pins().active());
    assert_eq!(ctx.sim.cpu.regs().snapshot(), [0; 8]);
}

#[test]
fn reset_hold_time_is_configurable() {
    let mut config = Config::default();
    config.core.reset_cycles = 2;
    let mut sim = Simulator::new(&config);
    sim.apply_reset();
    assert_eq!(sim.cycle(), 4);
    assert_eq!(sim.stats.cycles_reset, 2);
}

#[test]
fn output_is_sampled_before_the_clock_edge() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(2, 3);
    let _ = ctx.load(3, 6);

    assert_eq!(ctx.r(RegOp::Add, 2, 2, 3), 9);
    assert_eq!(ctx.reg(2), 9);
    assert_eq!(ctx.r(RegOp::Add, 2, 2, 3), 15);
}

#[test]
fn disabled_cycles_drive_zero_and_change_nothing() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(1, 5);

    ctx.sim.set_enable(false);
    let entry = ctx.sim.issue(&alu8_core::Op::Load { rd: x(1), imm: 99 });
    assert_eq!(entry.output, 0);
    assert!(!entry.executed);
    assert!(entry.writeback.is_none());
    assert_eq!(ctx.reg(1), 5);
    assert_eq!(ctx.sim.stats.cycles_disabled, 1);

    ctx.sim.set_enable(true);
    assert_eq!(ctx.store(1), 5);
}

#[test]
fn reset_mid_run_clears_registers() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(1, 5);
    let _ = ctx.load(7, -1);

    ctx.sim.set_reset_n(false);
    assert_eq!(ctx.sim.output(), 0);
    ctx.sim.tick_n(3);
    ctx.sim.set_reset_n(true);

    assert_eq!(ctx.store(1), 0);
    assert_eq!(ctx.store(7), 0);
}

#[test]
fn trace_records_each_cycle() {
    let mut ctx = TestContext::new();
    let program = parse_program("load x2, 3\nload x0, 4\nstore x2").unwrap();
    let trace = ctx.sim.run(&program);

    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].cycle, 21);
    assert_eq!(trace[0].disasm, "load x2, 3");
    assert_eq!(trace[0].word, 0x030A);

    let wb = trace[0].writeback.unwrap();
    assert_eq!((wb.reg, wb.value, wb.committed), (2, 3, true));

    let wb = trace[1].writeback.unwrap();
    assert_eq!((wb.reg, wb.committed), (0, false));

    assert_eq!(trace[2].output, 3);
    assert!(trace[2].writeback.is_none());
}

#[test]
fn trace_entries_serialize_to_json() {
    let mut ctx = TestContext::new();
    let entry = ctx.sim.issue(&alu8_core::Op::Load { rd: x(1), imm: -2 });
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["disasm"], "load x1, -2");
    assert_eq!(json["output"], -2);
    assert_eq!(json["output_raw"], 254);
    assert_eq!(json["executed"], true);
    assert_eq!(json["writeback"]["reg"], 1);
    assert_eq!(json["writeback"]["committed"], true);
}

#[test]
fn issue_word_accepts_raw_port_bytes() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(2, 3);
    let _ = ctx.load(3, 6);
    // add x6, x2, x3
    let entry = ctx.sim.issue_word(0x58, 0x43);
    assert_eq!(entry.output, 9);
    assert_eq!(ctx.sim.reg(Reg::from_bits(6)), 9);
}
