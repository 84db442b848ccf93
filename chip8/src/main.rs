use std::path::PathBuf;

use clap::Parser;

use ch8_core::CLOCK_SPEED;

mod run;

/// Runs a Chip-8 program, printing each changed frame to the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Ticks per second; 0 runs as fast as possible
    #[arg(long, default_value_t = CLOCK_SPEED)]
    hz: u64,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Seed for the random number opcode, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Log every executed instruction (RUST_LOG takes precedence)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    run::run(&args)
}
