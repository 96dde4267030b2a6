//! Sync clock generation and MIDI command interpretation.
//!
//! [`SyncState`] is the single mutable state shared by both concerns: the
//! per-block clock tick that decides whether a pulse byte goes out, and
//! the inbound MIDI interpreter that flips the play flag, changes the
//! tempo divisor, or requests pass-through traffic. Both run on the
//! real-time thread only.

mod clock;
mod interpreter;

pub use clock::{SyncState, CLOCK_BYTE, ROW_SYNC_BYTE};
pub use interpreter::MidiAction;
