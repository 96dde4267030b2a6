//! Host-facing instrument controller.
//!
//! [`Instrument`] wires an emulation source, the audio bridge, and the
//! sync clock into the two callbacks a host drives: audio block
//! processing and MIDI input. Everything here runs on the real-time
//! thread; nothing allocates after construction.

// Re-export common types so hosts don't need the leaf crates directly.
pub use cl_bridge::{
    AudioBridge, BlockOutcome, BufferedEmulator, CpalHost, EmulatorCore, HostError,
    MAX_BLOCK_FRAMES,
};
pub use cl_core::{EmulationSource, MidiMessage, SyncMode, TempoDivisor, TransportInfo};
pub use cl_sync::{MidiAction, SyncState, CLOCK_BYTE, ROW_SYNC_BYTE};

/// MIDI channel used for sync pulses and pass-through traffic.
const SINK_CHANNEL: u8 = 0;

/// Fallback sample rate until the host reports one.
const DEFAULT_SAMPLE_RATE: f64 = 44_100.0;

/// The instrument: one emulation source plus the bridge and sync state
/// serving a host's audio/MIDI callbacks.
pub struct Instrument<S: EmulationSource> {
    source: S,
    bridge: AudioBridge,
    sync: SyncState,
    sample_rate: f64,
}

impl<S: EmulationSource> Instrument<S> {
    /// Create an instrument serving host blocks of up to `max_frames`.
    pub fn new(source: S, max_frames: usize) -> Self {
        Self {
            source,
            bridge: AudioBridge::new(max_frames),
            sync: SyncState::new(SyncMode::Off),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Process one host audio block, fully populating both channels.
    ///
    /// The sync clock ticks first so a pulse for this block reaches the
    /// emulator before its audio is pumped.
    pub fn process_block(
        &mut self,
        transport: &TransportInfo,
        left: &mut [f32],
        right: &mut [f32],
    ) -> BlockOutcome {
        if left.is_empty() || !self.source.is_active() {
            left.fill(0.0);
            right.fill(0.0);
            return BlockOutcome::Skipped;
        }

        if let Some(byte) = self.sync.clock_tick(transport) {
            self.source.send_midi_byte(SINK_CHANNEL, byte);
        }

        self.bridge.process(&mut self.source, left, right)
    }

    /// Process one inbound MIDI message.
    pub fn process_midi(&mut self, msg: MidiMessage) {
        match self.sync.handle_midi(msg) {
            MidiAction::None => {}
            MidiAction::SendByte(byte) => self.source.send_midi_byte(SINK_CHANNEL, byte),
            MidiAction::SendBytes(bytes) => self.source.send_midi_bytes(SINK_CHANNEL, &bytes),
        }
    }

    /// Select the sync protocol for the detected tracker software.
    pub fn set_sync_mode(&mut self, mode: SyncMode) {
        self.sync.set_mode(mode);
    }

    pub fn sync(&self) -> &SyncState {
        &self.sync
    }

    /// Called from the host's reset path when the sample rate changes.
    pub fn set_sample_rate(&mut self, rate: f64) {
        self.sample_rate = rate;
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Duration of `frames` at the current sample rate, in milliseconds.
    pub fn frames_to_ms(&self, frames: usize) -> f64 {
        frames as f64 / (self.sample_rate / 1000.0)
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.bridge.set_gain(gain);
    }

    pub fn gain(&self) -> f32 {
        self.bridge.gain()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
