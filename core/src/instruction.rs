use std::fmt;

use rand::RngCore;

use crate::error::{Error, Result};
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded opcode along with the operands it uses
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 0nnn
    Sys(u16),
    /// 00E0
    Cls,
    /// 00EE
    Ret,
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SkipEq(usize, u8),
    /// 4xkk
    SkipNe(usize, u8),
    /// 6xkk
    Load(usize, u8),
    /// 7xkk
    Add(usize, u8),
    /// 8xy0
    Move(usize, usize),
    /// Annn
    LoadI(u16),
    /// Bnnn
    JumpV0(u16),
    /// Cxkk
    Rand(usize, u8),
    /// Dxyn
    Draw(usize, usize, u8),
    /// Ex9E
    SkipKey(usize),
    /// ExA1
    SkipNoKey(usize),
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode
    ///
    /// Only a subset of Chip-8 is implemented; anything else (e.g. 5xy0, 8xy4, Fx__) is
    /// rejected with `Error::InvalidOpcode` rather than skipped.
    pub fn decode(op: u16) -> Result<Self> {
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Cls,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Ret,
            (0x0, ..) => Instruction::Sys(op.addr()),
            (0x1, ..) => Instruction::Jump(op.addr()),
            (0x2, ..) => Instruction::Call(op.addr()),
            (0x3, ..) => Instruction::SkipEq(op.x(), op.kk()),
            (0x4, ..) => Instruction::SkipNe(op.x(), op.kk()),
            (0x6, ..) => Instruction::Load(op.x(), op.kk()),
            (0x7, ..) => Instruction::Add(op.x(), op.kk()),
            (0x8, .., 0x0) => Instruction::Move(op.x(), op.y()),
            (0xA, ..) => Instruction::LoadI(op.addr()),
            (0xB, ..) => Instruction::JumpV0(op.addr()),
            (0xC, ..) => Instruction::Rand(op.x(), op.kk()),
            (0xD, ..) => Instruction::Draw(op.x(), op.y(), op.n()),
            (0xE, _, 0x9, 0xE) => Instruction::SkipKey(op.x()),
            (0xE, _, 0xA, 0x1) => Instruction::SkipNoKey(op.x()),
            _ => return Err(Error::InvalidOpcode(op)),
        };
        Ok(instruction)
    }

    /// Runs the instruction against `state` and reports where the pc should go next
    pub fn execute(self, state: &mut State, rng: &mut dyn RngCore) -> ProgramCounter {
        match self {
            Instruction::Sys(addr) => sys(addr, state),
            Instruction::Cls => cls(state),
            Instruction::Ret => ret(state),
            Instruction::Jump(addr) => jump(addr, state),
            Instruction::Call(addr) => call(addr, state),
            Instruction::SkipEq(x, kk) => ske(x, kk, state),
            Instruction::SkipNe(x, kk) => skne(x, kk, state),
            Instruction::Load(x, kk) => load(x, kk, state),
            Instruction::Add(x, kk) => add(x, kk, state),
            Instruction::Move(x, y) => mv(x, y, state),
            Instruction::LoadI(addr) => loadi(addr, state),
            Instruction::JumpV0(addr) => jumpi(addr, state),
            Instruction::Rand(x, kk) => rand(x, kk, state, rng),
            Instruction::Draw(x, y, n) => draw(x, y, n, state),
            Instruction::SkipKey(x) => skpr(x, state),
            Instruction::SkipNoKey(x) => skup(x, state),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Instruction::Sys(addr) => write!(f, "SYS {:#05X}", addr),
            Instruction::Cls => write!(f, "CLS"),
            Instruction::Ret => write!(f, "RET"),
            Instruction::Jump(addr) => write!(f, "JP {:#05X}", addr),
            Instruction::Call(addr) => write!(f, "CALL {:#05X}", addr),
            Instruction::SkipEq(x, kk) => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Instruction::SkipNe(x, kk) => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            Instruction::Load(x, kk) => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Instruction::Add(x, kk) => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Instruction::Move(x, y) => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::LoadI(addr) => write!(f, "LD I, {:#05X}", addr),
            Instruction::JumpV0(addr) => write!(f, "JP V0, {:#05X}", addr),
            Instruction::Rand(x, kk) => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Instruction::Draw(x, y, n) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Instruction::SkipKey(x) => write!(f, "SKP V{:X}", x),
            Instruction::SkipNoKey(x) => write!(f, "SKNP V{:X}", x),
        }
    }
}
