//! Standalone demo: a square-wave emulator core played through the
//! default output device, with the sync clock running against an
//! internal 120 BPM transport.
//!
//! Usage: cargo run -p cl-plug --example standalone

use cl_plug::{BufferedEmulator, CpalHost, EmulatorCore, Instrument, SyncMode, TransportInfo};
use ringbuf::traits::Producer;
use ringbuf::HeapProd;

/// Minimal stand-in for a real emulation core: a fixed-frequency square
/// wave pushed in small tick-sized chunks.
struct SquareCore {
    phase: f32,
    step: f32,
    pulses: u32,
}

impl SquareCore {
    fn new(freq: f32, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            step: freq / sample_rate,
            pulses: 0,
        }
    }
}

impl EmulatorCore for SquareCore {
    fn is_active(&self) -> bool {
        true
    }

    fn run_tick(&mut self, audio: &mut HeapProd<f32>) {
        for _ in 0..32 {
            let sample = if self.phase < 0.5 { 0.15 } else { -0.15 };
            let _ = audio.try_push(sample);
            let _ = audio.try_push(sample);
            self.phase += self.step;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }

    fn send_midi(&mut self, _channel: u8, bytes: &[u8]) {
        self.pulses += bytes.len() as u32;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut host = CpalHost::new()?;
    let sample_rate = host.sample_rate() as f64;
    println!("Output device at {} Hz", host.sample_rate());

    let core = SquareCore::new(440.0, sample_rate as f32);
    let emu = BufferedEmulator::new(core, 16384);
    let mut instrument = Instrument::new(emu, cl_plug::MAX_BLOCK_FRAMES);
    instrument.set_sample_rate(sample_rate);
    instrument.set_sync_mode(SyncMode::Slave);
    instrument.set_gain(0.8);

    // Internal transport: 120 BPM = 2 quarter notes per second.
    let mut frames_done = 0u64;
    host.run(move |left, right| {
        let ppq = frames_done as f64 / sample_rate * 2.0;
        instrument.process_block(&TransportInfo::rolling(ppq), left, right);
        frames_done += left.len() as u64;
    })?;

    println!("Playing a 440 Hz square for 3 seconds (clock pulses at 48 Hz)...");
    std::thread::sleep(std::time::Duration::from_secs(3));
    host.stop()?;

    Ok(())
}
