use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{KEY_COUNT, PROGRAM_CAPACITY, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::opcode;
use crate::operations::ProgramCounter;
use crate::state::{FrameBuffer, State};

/// What the host can observe after a single tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// A draw flipped at least one pixel; the frame should be re-rendered
    pub screen_changed: bool,
    /// The sound timer just reached 0 from a nonzero value
    pub beep: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - a random number generator, seeded once and kept across resets
///
/// Supplies interfaces for:
/// - loading program images
/// - pressing and releasing keys
/// - advancing the machine one instruction at a time
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a machine whose random numbers are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Puts every register, timer, key and pixel back to its power-on value
    pub fn reset(&mut self) {
        self.state = State::new();
    }

    /// Resets the machine and copies `image` into memory at 0x200
    ///
    /// # Arguments
    /// * `image` the raw bytes of a program; no header is expected
    ///
    /// Fails without touching the machine if the image doesn't fit in memory.
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > PROGRAM_CAPACITY {
            return Err(Error::ImageTooLarge {
                size: image.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }

        self.reset();
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + image.len()].copy_from_slice(image);
        info!("loaded {} byte program", image.len());
        Ok(())
    }

    /// Advances the machine by a single instruction
    /// - fetches, decodes and executes the opcode at the pc
    /// - moves the pc on unless the instruction already did
    /// - decrements both timers
    ///
    /// An `InvalidOpcode` error leaves the machine in an undefined state; stop ticking.
    pub fn tick(&mut self) -> Result<Tick> {
        self.state.screen_changed = false;

        let op = self.get_op();
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        let instruction = Instruction::decode(op)?;
        debug!("{:04X}: {}", self.state.pc, instruction);

        self.state.pc = match instruction.execute(&mut self.state, &mut self.rng) {
            ProgramCounter::Next => self.state.pc.wrapping_add(2),
            ProgramCounter::Skip => self.state.pc.wrapping_add(4),
            ProgramCounter::Jump(addr) => addr,
        };

        let beep = self.advance_timers();
        Ok(Tick {
            screen_changed: self.state.screen_changed,
            beep,
        })
    }

    /// Decrements both timers; returns true if the sound timer just ran out
    fn advance_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
            return self.state.sound_timer == 0;
        }
        false
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        let pc = self.state.pc;
        opcode::from_bytes(self.state.read(pc), self.state.read(pc.wrapping_add(1)))
    }

    /// Returns the FrameBuffer if the last tick changed it
    pub fn get_frame(&self) -> Option<&FrameBuffer> {
        if self.state.screen_changed {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether the last tick flipped any pixel
    pub fn screen_changed(&self) -> bool {
        self.state.screen_changed
    }

    /// Replaces the pressed status of every key at once
    pub fn set_keys(&mut self, pressed_keys: [bool; KEY_COUNT]) {
        self.state.pressed_keys = pressed_keys;
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed; only the low nibble is used
    pub fn key_press(&mut self, key: u8) {
        self.state.pressed_keys[(key & 0x0F) as usize] = true;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released; only the low nibble is used
    pub fn key_release(&mut self, key: u8) {
        self.state.pressed_keys[(key & 0x0F) as usize] = false;
    }

    /// Read-only view of the whole machine, e.g. for debuggers
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
