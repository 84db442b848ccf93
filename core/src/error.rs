use thiserror::Error;

/// Everything that can go wrong while loading or running a program
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The program image doesn't fit between the load address and the end of memory.
    /// Raised before any state is touched.
    #[error("program image is {size} bytes but only {capacity} bytes are available")]
    ImageTooLarge { size: usize, capacity: usize },

    /// The fetched word isn't an instruction this interpreter implements.
    /// Machine state is undefined afterwards and the host shouldn't keep ticking.
    #[error("invalid opcode {0:#06X}")]
    InvalidOpcode(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
