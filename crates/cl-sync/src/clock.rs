//! Sync-clock state machine.

use cl_core::{SyncMode, TempoDivisor, TransportInfo};

/// Pulse byte for the clock-slave protocols (MIDI timing clock).
pub const CLOCK_BYTE: u8 = 0xF8;

/// Pulse byte for the row-map protocol.
pub const ROW_SYNC_BYTE: u8 = 0xFF;

/// Base pulse rate relative to the quarter-note position.
const PULSES_PER_QUARTER: f64 = 24.0;

/// Per-mode emission profile: divisor, gating, and pulse byte.
///
/// Modes without a profile (`Off`) emit nothing and track no phase.
struct ModeProfile {
    divisor: u32,
    gated: bool,
    byte: u8,
}

/// Mutable sync state, owned by the instrument for its whole lifetime and
/// touched only from the real-time thread.
#[derive(Clone, Debug, Default)]
pub struct SyncState {
    pub(crate) mode: SyncMode,
    pub(crate) tempo_divisor: TempoDivisor,
    pub(crate) tracker_playing: bool,
    pub(crate) last_phase: f64,
}

impl SyncState {
    pub fn new(mode: SyncMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    /// Select a sync protocol. The only way modes change; phase history
    /// carries over.
    pub fn set_mode(&mut self, mode: SyncMode) {
        self.mode = mode;
    }

    pub fn tempo_divisor(&self) -> TempoDivisor {
        self.tempo_divisor
    }

    pub fn tracker_playing(&self) -> bool {
        self.tracker_playing
    }

    fn profile(&self) -> Option<ModeProfile> {
        match self.mode {
            SyncMode::Off => None,
            SyncMode::Slave => Some(ModeProfile {
                divisor: 1,
                gated: false,
                byte: CLOCK_BYTE,
            }),
            SyncMode::SlaveTracker => Some(ModeProfile {
                divisor: self.tempo_divisor.factor(),
                gated: true,
                byte: CLOCK_BYTE,
            }),
            SyncMode::RowMap => Some(ModeProfile {
                divisor: 1,
                gated: true,
                byte: ROW_SYNC_BYTE,
            }),
        }
    }

    /// Advance the clock for one block, returning the pulse byte to send
    /// if an edge fired. At most one pulse per block.
    ///
    /// Forward motion pulses on integer phase boundaries; any backward or
    /// stationary phase (transport rewound, looped, or resumed in place)
    /// is one resync pulse. A gated-off protocol leaves the phase
    /// untouched so an inactive protocol cannot corrupt it.
    pub fn clock_tick(&mut self, transport: &TransportInfo) -> Option<u8> {
        if !transport.running {
            return None;
        }
        let profile = self.profile()?;
        if profile.gated && !self.tracker_playing {
            return None;
        }

        let phase = transport.ppq_position * (PULSES_PER_QUARTER / profile.divisor as f64);
        let edge = if phase > self.last_phase {
            phase.floor() != self.last_phase.floor()
        } else {
            true
        };
        self.last_phase = phase;

        edge.then_some(profile.byte)
    }
}
