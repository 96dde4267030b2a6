//! Host transport snapshot.

/// A read-only snapshot of the host transport, supplied fresh each block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransportInfo {
    /// Whether the transport is rolling.
    pub running: bool,
    /// Musical position in quarter notes (PPQ).
    pub ppq_position: f64,
}

impl TransportInfo {
    /// A rolling transport at the given quarter-note position.
    pub fn rolling(ppq_position: f64) -> Self {
        Self {
            running: true,
            ppq_position,
        }
    }

    /// A stopped transport at the given quarter-note position.
    pub fn stopped_at(ppq_position: f64) -> Self {
        Self {
            running: false,
            ppq_position,
        }
    }
}
