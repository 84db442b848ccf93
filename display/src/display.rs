use std::io::{self, Write};

use ch8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use ch8_core::FrameBuffer;

const LIT: char = '█';
const UNLIT: char = ' ';
const SEPARATOR: &str = "---";

/// # Display
/// The Chip-8 display is composed of 64x32 pixels black/white pixels.
/// The on/off state of these pixels is encoded as true/false in a 2d array of 32x64 bools.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
///
/// Frames are written as text, one line per row, followed by a separator line.
pub struct TextDisplay<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextDisplay<W> {
    /// Creates a new display writing frames to `out`
    ///
    /// # Arguments
    /// * `out` where rendered frames go, e.g. `std::io::stdout()`
    pub fn new(out: W) -> Self {
        TextDisplay { out, frames: 0 }
    }

    /// Formats a Chip-8 FrameBuffer as lines of text.
    ///
    /// Each row becomes a line of `DISPLAY_WIDTH` glyphs, lit pixels as a full block.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn frame_to_text(frame: &FrameBuffer) -> String {
        let mut text = String::with_capacity(DISPLAY_HEIGHT * (DISPLAY_WIDTH * LIT.len_utf8() + 1));
        for row in frame.iter() {
            text.extend(row.iter().map(|&lit| if lit { LIT } else { UNLIT }));
            text.push('\n');
        }
        text
    }

    /// Formats the Chip-8 FrameBuffer as text and writes it out.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        self.out.write_all(Self::frame_to_text(frame).as_bytes())?;
        writeln!(self.out, "{}", SEPARATOR)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// How many frames have been rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Gives back the writer, e.g. to inspect what was rendered
    pub fn into_inner(self) -> W {
        self.out
    }
}
