pub use crate::chip8::{Chip8, Tick};
pub use crate::constants::CLOCK_SPEED;
pub use crate::error::{Error, Result};
pub use crate::operations::ProgramCounter;
pub use crate::state::FrameBuffer;

mod chip8;
pub mod constants;
mod error;
pub mod instruction;
mod opcode;
mod operations;
pub mod state;
