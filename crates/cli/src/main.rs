//! alu8 command line runner.
//!
//! This binary provides a thin front end over the core model. It performs:
//! 1. **Run:** Reset the core, issue every instruction of a program, print the per-cycle trace.
//! 2. **Assemble:** Print the `low high` port bytes of every instruction in a program.
//! 3. **Disassemble:** Print the mnemonic for instruction words given on the command line.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use alu8_core::Simulator;
use alu8_core::config::Config;
use alu8_core::isa::disasm::disassemble;
use alu8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "alu8",
    author,
    version,
    about = "Behavioral model of an 8-bit ALU/register core",
    long_about = "Run programs against the pin-level core model, or convert between assembly and instruction words.\n\nExamples:\n  alu8 run demos/arith.s\n  alu8 run demos/arith.s --json\n  alu8 asm demos/arith.s\n  alu8 disasm 0x4358 0x0003"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reset the core and run a program (assembly, or `.hex` word list).
    Run {
        /// Program to run.
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the trace as JSON lines instead of text.
        #[arg(long)]
        json: bool,

        /// Print the register file after the run.
        #[arg(long)]
        dump_regs: bool,

        /// Print run statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Assemble a program and print each instruction's `low high` bytes.
    Asm {
        /// Program to assemble.
        program: PathBuf,
    },

    /// Disassemble instruction words (hex, `0x` prefix optional).
    Disasm {
        /// Words to disassemble.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            program,
            config,
            json,
            dump_regs,
            stats,
        } => cmd_run(&program, config.as_deref(), json, dump_regs, stats),
        Commands::Asm { program } => cmd_asm(&program),
        Commands::Disasm { words } => cmd_disasm(&words),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Runs a program from reset and prints one trace line per instruction.
fn cmd_run(
    program: &Path,
    config: Option<&Path>,
    json: bool,
    dump_regs: bool,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let ops = loader::load_program(program)?;
    info!(instructions = ops.len(), program = %program.display(), "program loaded");

    let mut sim = Simulator::new(&config);
    sim.apply_reset();

    for op in &ops {
        let entry = sim.issue(op);
        if json {
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!("{entry}");
        }
    }

    if dump_regs {
        print!("{}", sim.cpu.regs());
    }
    if stats {
        sim.stats.print();
    }
    Ok(())
}

/// Prints the encoding of every instruction in a program.
fn cmd_asm(program: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for op in loader::load_program(program)? {
        let (low, high) = op.bytes();
        println!("{low:08b} {high:08b}  {:#06x}  {op}", op.encode());
    }
    Ok(())
}

/// Disassembles each word given on the command line.
fn cmd_disasm(words: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for text in words {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let word = u16::from_str_radix(digits, 16)
            .map_err(|e| format!("invalid instruction word `{text}`: {e}"))?;
        println!("{word:#06x}  {}", disassemble(word));
    }
    Ok(())
}
