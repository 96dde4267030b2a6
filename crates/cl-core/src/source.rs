//! Emulation source boundary.

/// Interface to the hardware-emulation engine consumed by the bridge.
///
/// The engine produces interleaved stereo `f32` samples and accepts MIDI
/// bytes addressed to the emulated serial link. Every method is called
/// from the real-time audio thread and must not lock, allocate, or block.
pub trait EmulationSource {
    /// Whether the engine is loaded and able to produce audio.
    fn is_active(&self) -> bool;

    /// Run one internal emulation tick; may enqueue samples.
    fn advance(&mut self);

    /// Interleaved stereo samples currently buffered for reading.
    fn audio_available(&self) -> usize;

    /// Read up to `dest.len()` samples into `dest`, returning the count
    /// actually read.
    fn audio_read(&mut self, dest: &mut [f32]) -> usize;

    /// Send a single MIDI byte to the emulated hardware.
    fn send_midi_byte(&mut self, channel: u8, byte: u8);

    /// Send a MIDI byte sequence to the emulated hardware.
    fn send_midi_bytes(&mut self, channel: u8, bytes: &[u8]);
}
