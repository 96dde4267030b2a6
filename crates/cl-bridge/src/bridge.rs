//! Audio block bridge between the emulation engine and the host callback.

use cl_core::EmulationSource;

/// Default pump budget: emulation ticks allowed per missing sample before
/// the block degrades to silence.
const PUMP_TICKS_PER_SAMPLE: usize = 4;

/// Outcome of processing one audio block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockOutcome {
    /// Output fully rendered from emulation audio.
    Rendered,
    /// Degenerate call (zero frames or inactive source); output silenced.
    Skipped,
    /// A fault was hit; output silenced for this block and a diagnostic
    /// logged.
    Degraded,
}

impl BlockOutcome {
    /// True when the block carries rendered emulation audio.
    pub fn is_rendered(self) -> bool {
        self == BlockOutcome::Rendered
    }
}

/// Pulls emulation audio into host output blocks.
///
/// Owns a preallocated interleaved scratch buffer sized at construction
/// for the largest block the host may request; [`AudioBridge::process`]
/// performs no heap allocation.
pub struct AudioBridge {
    scratch: Vec<f32>,
    gain: f32,
    pump_ticks_per_sample: usize,
}

impl AudioBridge {
    /// Create a bridge able to serve blocks of up to `max_frames` frames.
    pub fn new(max_frames: usize) -> Self {
        Self {
            scratch: vec![0.0; max_frames * 2],
            gain: 1.0,
            pump_ticks_per_sample: PUMP_TICKS_PER_SAMPLE,
        }
    }

    /// Largest frame count a single `process` call can serve.
    pub fn max_frames(&self) -> usize {
        self.scratch.len() / 2
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Replace the output gain factor (1.0 = unity).
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Override the pump budget, in emulation ticks per missing sample.
    pub fn set_pump_budget(&mut self, ticks_per_sample: usize) {
        self.pump_ticks_per_sample = ticks_per_sample;
    }

    /// Fill `left`/`right` with one block of emulation audio.
    ///
    /// `left` and `right` must have equal length; that length is the
    /// requested frame count. On every degraded or degenerate path with a
    /// non-zero frame count both channels are zero-filled, so callers
    /// always hand the host a fully populated block.
    pub fn process(
        &mut self,
        source: &mut dyn EmulationSource,
        left: &mut [f32],
        right: &mut [f32],
    ) -> BlockOutcome {
        debug_assert_eq!(left.len(), right.len());
        let frames = left.len().min(right.len());
        if frames == 0 {
            return BlockOutcome::Skipped;
        }
        if !source.is_active() {
            silence(left, right);
            return BlockOutcome::Skipped;
        }

        let needed = frames * 2;
        if needed > self.scratch.len() {
            log::warn!(
                "host requested {} frames but bridge capacity is {}; silencing block",
                frames,
                self.scratch.len() / 2
            );
            silence(left, right);
            return BlockOutcome::Degraded;
        }

        // Pump the emulation until enough samples are buffered. Bounded:
        // a source that dies mid-pump or produces nothing within the tick
        // budget degrades to silence instead of stalling the callback.
        let mut budget = needed * self.pump_ticks_per_sample;
        while source.audio_available() < needed {
            if !source.is_active() {
                silence(left, right);
                return BlockOutcome::Skipped;
            }
            if budget == 0 {
                log::warn!(
                    "emulation produced under {} samples within the pump budget; silencing block",
                    needed
                );
                silence(left, right);
                return BlockOutcome::Degraded;
            }
            source.advance();
            budget -= 1;
        }

        let scratch = &mut self.scratch[..needed];
        let read = source.audio_read(scratch);
        if read != needed {
            // Short drain right after availability was confirmed: the
            // SPSC discipline was violated somewhere upstream.
            log::warn!("drained {} of {} samples; silencing block", read, needed);
            silence(left, right);
            return BlockOutcome::Degraded;
        }

        let gain = self.gain;
        for i in 0..frames {
            left[i] = scratch[i * 2] * gain;
            right[i] = scratch[i * 2 + 1] * gain;
        }
        BlockOutcome::Rendered
    }
}

fn silence(left: &mut [f32], right: &mut [f32]) {
    left.fill(0.0);
    right.fill(0.0);
}
