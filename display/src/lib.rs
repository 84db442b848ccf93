pub use crate::display::TextDisplay;

mod display;
