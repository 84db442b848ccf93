use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SET, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT,
};

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the collision flag set by draw
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - return addresses pushed by call and popped by return
/// - a fresh state holds a single 0x000 entry, so one unmatched return lands on address 0
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - both are decremented once per tick while above 0
///
/// ## Memory
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the font set
///     - 0x200.. is where programs are loaded
/// - 32x64 frame buffer of lit/unlit pixels
///
/// ## Input
/// - 16 pressed flags for keys 0..F, written by the host between ticks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub pressed_keys: [bool; KEY_COUNT],
    pub screen_changed: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            stack: vec![0x000],
            delay_timer: 0,
            sound_timer: 0,
            memory,
            frame_buffer: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            pressed_keys: [false; KEY_COUNT],
            screen_changed: false,
        }
    }

    /// Reads the byte at `addr`, wrapping around the end of memory
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[addr as usize % MEMORY_SIZE]
    }

    /// Whether the key held in the low nibble of `key` is pressed
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed_keys[(key & 0x0F) as usize]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The FrameBuffer is indexed as [y][x]; `true` is a lit pixel
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_holds_font() {
        let state = State::new();
        assert_eq!(state.memory[..80], FONT_SET[..]);
        assert!(state.memory[80..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_state_starts_at_program() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.stack, vec![0x000]);
    }

    #[test]
    fn test_read_wraps() {
        let mut state = State::new();
        state.memory[0x001] = 0xAB;
        assert_eq!(state.read(0x1001), 0xAB);
    }

    #[test]
    fn test_is_pressed_masks_key() {
        let mut state = State::new();
        state.pressed_keys[0xA] = true;
        assert!(state.is_pressed(0x1A));
        assert!(!state.is_pressed(0x1B));
    }
}
