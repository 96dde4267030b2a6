//! Inbound MIDI command interpreter.

use cl_core::{MidiMessage, SyncMode, TempoDivisor};

use crate::clock::SyncState;

/// Tracker control notes understood in [`SyncMode::SlaveTracker`].
const NOTE_PLAY: u8 = 24;
const NOTE_STOP: u8 = 25;
const NOTE_DIV1: u8 = 26;
const NOTE_DIV2: u8 = 27;
const NOTE_DIV4: u8 = 28;
const NOTE_DIV8: u8 = 29;

/// Bytes the interpreter wants delivered to the emulation sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MidiAction {
    /// Nothing to deliver.
    None,
    /// Deliver a single byte.
    SendByte(u8),
    /// Forward the raw three-byte message unmodified.
    SendBytes([u8; 3]),
}

impl SyncState {
    /// Interpret one inbound MIDI message according to the active mode,
    /// mutating sync state and/or requesting sink traffic.
    pub fn handle_midi(&mut self, msg: MidiMessage) -> MidiAction {
        match self.mode {
            SyncMode::SlaveTracker => self.handle_tracker_note(msg),
            SyncMode::RowMap => {
                if msg.is_note_on() {
                    // Row select: the note number goes straight through.
                    MidiAction::SendByte(msg.note())
                } else {
                    MidiAction::None
                }
            }
            // No tracker protocol detected: generic pass-through for
            // software that consumes raw MIDI itself.
            SyncMode::Off => MidiAction::SendBytes(msg.bytes()),
            SyncMode::Slave => MidiAction::None,
        }
    }

    fn handle_tracker_note(&mut self, msg: MidiMessage) -> MidiAction {
        if !msg.is_note_on() {
            return MidiAction::None;
        }
        match msg.note() {
            NOTE_PLAY => self.tracker_playing = true,
            NOTE_STOP => self.tracker_playing = false,
            NOTE_DIV1 => self.tempo_divisor = TempoDivisor::Div1,
            NOTE_DIV2 => self.tempo_divisor = TempoDivisor::Div2,
            NOTE_DIV4 => self.tempo_divisor = TempoDivisor::Div4,
            NOTE_DIV8 => self.tempo_divisor = TempoDivisor::Div8,
            n if n > NOTE_DIV8 => {
                // TODO: forward row selection once the tracker-side wire
                // encoding for it is settled.
            }
            _ => {}
        }
        MidiAction::None
    }
}
