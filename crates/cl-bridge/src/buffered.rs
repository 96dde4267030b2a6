//! SPSC-buffered adapter from a raw emulator core to the source boundary.

use cl_core::EmulationSource;
use ringbuf::traits::{Consumer, Observer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};

/// A raw emulation core that renders into a sample queue.
///
/// One `run_tick` call advances the emulation by its own internal step
/// and may push any number of interleaved stereo samples.
pub trait EmulatorCore {
    /// Whether the core has something loaded and can produce audio.
    fn is_active(&self) -> bool;

    /// Advance one emulation step, pushing samples to `audio`.
    fn run_tick(&mut self, audio: &mut HeapProd<f32>);

    /// Deliver MIDI bytes to the emulated hardware.
    fn send_midi(&mut self, channel: u8, bytes: &[u8]);
}

/// Couples an [`EmulatorCore`] to the bridge through a lock-free SPSC
/// ring buffer.
///
/// The core is the sole producer (pushed from `advance`, reentered on the
/// audio thread by the pump loop) and the bridge is the sole consumer;
/// the ring's atomic cursors carry the rest.
pub struct BufferedEmulator<C> {
    core: C,
    producer: HeapProd<f32>,
    consumer: HeapCons<f32>,
}

impl<C: EmulatorCore> BufferedEmulator<C> {
    /// Wrap `core` with a ring buffer holding `capacity` samples.
    pub fn new(core: C, capacity: usize) -> Self {
        let (producer, consumer) = HeapRb::new(capacity).split();
        Self {
            core,
            producer,
            consumer,
        }
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }
}

impl<C: EmulatorCore> EmulationSource for BufferedEmulator<C> {
    fn is_active(&self) -> bool {
        self.core.is_active()
    }

    fn advance(&mut self) {
        self.core.run_tick(&mut self.producer);
    }

    fn audio_available(&self) -> usize {
        self.consumer.occupied_len()
    }

    fn audio_read(&mut self, dest: &mut [f32]) -> usize {
        self.consumer.pop_slice(dest)
    }

    fn send_midi_byte(&mut self, channel: u8, byte: u8) {
        self.core.send_midi(channel, &[byte]);
    }

    fn send_midi_bytes(&mut self, channel: u8, bytes: &[u8]) {
        self.core.send_midi(channel, bytes);
    }
}
