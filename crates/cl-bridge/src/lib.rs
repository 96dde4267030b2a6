//! Audio plumbing between the emulation engine and the host callback.
//!
//! [`AudioBridge`] drains blocks of emulation audio into host output
//! channels without allocating on the real-time thread.
//! [`BufferedEmulator`] adapts a raw [`EmulatorCore`] to the
//! [`cl_core::EmulationSource`] boundary through a lock-free SPSC ring
//! buffer, and [`CpalHost`] drives a block processor from a real output
//! device for standalone use.

mod bridge;
mod buffered;
mod cpal_host;

pub use bridge::{AudioBridge, BlockOutcome};
pub use buffered::{BufferedEmulator, EmulatorCore};
pub use cpal_host::{CpalHost, HostError, MAX_BLOCK_FRAMES};
