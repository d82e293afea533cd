//! Raw scanline input module
//!
//! Reads the 16-bit sample stream handed over by the demodulator into a channel buffer.

mod reader;
mod le_reader;

pub use reader::ScanlineReader;
pub use le_reader::LittleEndianReader;
