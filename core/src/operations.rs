use log::{debug, warn};
use rand::{Rng, RngCore};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SPRITE_WIDTH};
use crate::state::State;

/// How the program counter moves once an operation has run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProgramCounter {
    /// pc += 2
    Next,
    /// pc += 4; the following instruction is skipped
    Skip,
    /// pc = addr
    Jump(u16),
}

impl ProgramCounter {
    fn skip_if(condition: bool) -> Self {
        if condition {
            ProgramCounter::Skip
        } else {
            ProgramCounter::Next
        }
    }
}

/// machine routine; not emulated
pub fn sys(addr: u16, _state: &mut State) -> ProgramCounter {
    debug!("ignoring machine routine at {:#05X}", addr);
    ProgramCounter::Next
}

/// clear
/// Leaves `screen_changed` unset; only draw reports changes
pub fn cls(state: &mut State) -> ProgramCounter {
    state.frame_buffer = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    ProgramCounter::Next
}

/// PC = STACK.pop()
/// Popping the reset sentinel (or an empty stack) lands on 0x000
pub fn ret(state: &mut State) -> ProgramCounter {
    match state.stack.pop() {
        Some(addr) => ProgramCounter::Jump(addr),
        None => {
            warn!("return at {:#05X} with an empty stack", state.pc);
            ProgramCounter::Jump(0x000)
        }
    }
}

/// PC = addr
pub fn jump(addr: u16, _state: &mut State) -> ProgramCounter {
    ProgramCounter::Jump(addr)
}

/// STACK.push(PC + 2); PC = addr
pub fn call(addr: u16, state: &mut State) -> ProgramCounter {
    state.stack.push(state.pc.wrapping_add(2));
    ProgramCounter::Jump(addr)
}

/// if Vx == kk then pc += 2
pub fn ske(x: usize, kk: u8, state: &mut State) -> ProgramCounter {
    ProgramCounter::skip_if(state.v[x] == kk)
}

/// if Vx != kk then pc += 2
pub fn skne(x: usize, kk: u8, state: &mut State) -> ProgramCounter {
    ProgramCounter::skip_if(state.v[x] != kk)
}

/// Vx = kk
pub fn load(x: usize, kk: u8, state: &mut State) -> ProgramCounter {
    state.v[x] = kk;
    ProgramCounter::Next
}

/// Vx += kk
/// Wraps on overflow and leaves VF alone
pub fn add(x: usize, kk: u8, state: &mut State) -> ProgramCounter {
    state.v[x] = state.v[x].wrapping_add(kk);
    ProgramCounter::Next
}

/// Vx = Vy
pub fn mv(x: usize, y: usize, state: &mut State) -> ProgramCounter {
    state.v[x] = state.v[y];
    ProgramCounter::Next
}

/// I = addr
pub fn loadi(addr: u16, state: &mut State) -> ProgramCounter {
    state.i = addr;
    ProgramCounter::Next
}

/// PC = V0 + addr
pub fn jumpi(addr: u16, state: &mut State) -> ProgramCounter {
    ProgramCounter::Jump(addr + u16::from(state.v[0x0]))
}

/// Vx = rand_byte & kk
pub fn rand(x: usize, kk: u8, state: &mut State, rng: &mut dyn RngCore) -> ProgramCounter {
    let rand_byte: u8 = rng.gen();
    state.v[x] = rand_byte & kk;
    ProgramCounter::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position Vx, Vy on the FrameBuffer.
///
/// - the origin is wrapped onto the screen, then columns and rows wrap independently
/// - each sprite byte is one row, most significant bit leftmost
/// - `screen_changed` latches as soon as any pixel flips and VF is set to match
pub fn draw(x: usize, y: usize, n: u8, state: &mut State) -> ProgramCounter {
    let origin_x = state.v[x] as usize % DISPLAY_WIDTH;
    let mut row = state.v[y] as usize % DISPLAY_HEIGHT;
    let mut changed = false;

    for offset in 0..u16::from(n) {
        let sprite = state.read(state.i.wrapping_add(offset));
        for bit in 0..SPRITE_WIDTH {
            let column = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel = (sprite & (0x80 >> bit)) != 0;
            let before = state.frame_buffer[row][column];
            state.frame_buffer[row][column] = before ^ pixel;
            changed |= state.frame_buffer[row][column] != before;
        }
        row = (row + 1) % DISPLAY_HEIGHT;
    }

    debug!(
        "drew {} rows from {:#05X} at ({}, {}); changed: {}",
        n, state.i, origin_x, state.v[y] as usize % DISPLAY_HEIGHT, changed
    );
    state.screen_changed = changed;
    state.v[0xF] = u8::from(changed);
    ProgramCounter::Next
}

/// if Vx.pressed then pc += 2
pub fn skpr(x: usize, state: &mut State) -> ProgramCounter {
    ProgramCounter::skip_if(state.is_pressed(state.v[x]))
}

/// if !Vx.pressed then pc += 2
pub fn skup(x: usize, state: &mut State) -> ProgramCounter {
    ProgramCounter::skip_if(!state.is_pressed(state.v[x]))
}
