use std::fs;
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use ch8_core::Chip8;
use ch8_display::TextDisplay;

use crate::Args;

pub fn run(args: &Args) -> Result<()> {
    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let rom = fs::read(&args.rom)
        .with_context(|| format!("unable to read ROM {}", args.rom.display()))?;
    chip8
        .load(&rom)
        .with_context(|| format!("unable to load ROM {}", args.rom.display()))?;

    let stdout = io::stdout();
    let mut display = TextDisplay::new(stdout.lock());

    // Set initial timing
    let cycle_time = cycle_time(args.hz);
    let mut deadline: Instant = Instant::now() + cycle_time.unwrap_or_default();
    let mut ticks: u64 = 0;

    loop {
        if args.max_ticks.map_or(false, |max| ticks >= max) {
            info!("stopping after {} ticks", ticks);
            break;
        }

        // Update state
        let tick = chip8
            .tick()
            .with_context(|| format!("execution stopped after {} ticks", ticks))?;
        ticks += 1;

        // If the screen changed, render the current frame
        if let Some(frame) = chip8.get_frame() {
            display.render(frame).context("unable to render frame")?;
        }

        if tick.beep {
            info!("Beep!");
        }

        // Handle timing
        if let Some(cycle_time) = cycle_time {
            let (sleep, next_deadline) = pace(deadline, cycle_time, Instant::now());
            std::thread::sleep(sleep);
            deadline = next_deadline;
        }
    }

    info!("rendered {} frames", display.frames());
    Ok(())
}

/// Time budget for a single tick at `hz` ticks per second, or None to run unthrottled
fn cycle_time(hz: u64) -> Option<Duration> {
    if hz == 0 {
        None
    } else {
        Some(Duration::from_nanos(1_000_000_000 / hz))
    }
}

/// How long to sleep so the current tick ends on `deadline`, and the deadline for the next tick
///
/// A host that has fallen behind doesn't sleep and restarts its schedule from `now`
/// instead of running a burst of ticks to catch up.
fn pace(deadline: Instant, cycle_time: Duration, now: Instant) -> (Duration, Instant) {
    if now < deadline {
        (deadline - now, deadline + cycle_time)
    } else {
        (Duration::from_secs(0), now + cycle_time)
    }
}
