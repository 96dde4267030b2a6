//! Sync protocol modes and the tempo divisor.

/// External-sync protocol for the tracker software running inside the
/// emulated hardware.
///
/// The mode is selected by tracker detection outside this core and only
/// changes through an explicit mode-set; there are no automatic
/// transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// No sync protocol; inbound MIDI is forwarded raw to the emulator.
    #[default]
    Off,
    /// Tracker follows a plain MIDI clock stream (24 pulses per quarter).
    Slave,
    /// Tracker slave gated by a play flag, with a tempo divisor applied.
    SlaveTracker,
    /// Row-mapping protocol: inbound notes select pattern rows.
    RowMap,
}

/// Divisor applied to the 24 PPQN base rate in [`SyncMode::SlaveTracker`].
///
/// Only these four rates exist; the enum keeps any other value
/// unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TempoDivisor {
    #[default]
    Div1,
    Div2,
    Div4,
    Div8,
}

impl TempoDivisor {
    /// The numeric division factor.
    pub fn factor(self) -> u32 {
        match self {
            TempoDivisor::Div1 => 1,
            TempoDivisor::Div2 => 2,
            TempoDivisor::Div4 => 4,
            TempoDivisor::Div8 => 8,
        }
    }
}
