//! Core types for the chiplink audio/sync bridge.
//!
//! This crate defines the data model shared by the audio bridge, the sync
//! clock, and the host-facing instrument: transport snapshots, MIDI
//! messages, sync protocol modes, and the emulation source boundary.

mod midi;
mod source;
mod sync_mode;
mod transport;

pub use midi::MidiMessage;
pub use source::EmulationSource;
pub use sync_mode::{SyncMode, TempoDivisor};
pub use transport::TransportInfo;
