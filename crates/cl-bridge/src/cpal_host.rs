//! CPAL-based standalone host.
//!
//! Drives a block processor from a real output device, for running the
//! bridge outside a plugin host.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};

/// Largest planar block handed to the processor per callback slice.
pub const MAX_BLOCK_FRAMES: usize = 4096;

/// Error type for standalone host operations.
#[derive(Debug)]
pub enum HostError {
    /// No audio device available
    NoDevice,
    /// Failed to initialize audio device
    DeviceInit(String),
    /// Failed to create audio stream
    StreamCreate(String),
    /// Playback error
    Playback(String),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::NoDevice => write!(f, "No audio device available"),
            HostError::DeviceInit(msg) => write!(f, "Device init error: {}", msg),
            HostError::StreamCreate(msg) => write!(f, "Stream create error: {}", msg),
            HostError::Playback(msg) => write!(f, "Playback error: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Standalone CPAL output that runs a block processor on the device
/// callback thread.
pub struct CpalHost {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
}

impl CpalHost {
    /// Open the default output device.
    pub fn new() -> Result<Self, HostError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(HostError::NoDevice)?;

        let config = device
            .default_output_config()
            .map_err(|e| HostError::DeviceInit(e.to_string()))?;

        let mut config: StreamConfig = config.into();
        // Force stereo output — the planar staging assumes 2-channel
        // interleaving on the device side.
        config.channels = 2;

        Ok(Self {
            device,
            config,
            stream: None,
        })
    }

    /// Device sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    /// Build and start the output stream.
    ///
    /// `process` fills planar stereo blocks of at most
    /// [`MAX_BLOCK_FRAMES`] frames; device callbacks larger than that are
    /// served in slices. Staging buffers are allocated once, before the
    /// stream starts.
    pub fn run<F>(&mut self, mut process: F) -> Result<(), HostError>
    where
        F: FnMut(&mut [f32], &mut [f32]) + Send + 'static,
    {
        let channels = self.config.channels as usize;
        let mut left = vec![0.0f32; MAX_BLOCK_FRAMES];
        let mut right = vec![0.0f32; MAX_BLOCK_FRAMES];

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let frames = data.len() / channels;
                    let mut offset = 0;
                    while offset < frames {
                        let n = (frames - offset).min(MAX_BLOCK_FRAMES);
                        process(&mut left[..n], &mut right[..n]);

                        for i in 0..n {
                            let base = (offset + i) * channels;
                            for (ch, sample) in data[base..base + channels].iter_mut().enumerate() {
                                *sample = match ch {
                                    0 => left[i],
                                    1 => right[i],
                                    _ => 0.0,
                                };
                            }
                        }
                        offset += n;
                    }
                },
                |err| log::warn!("audio stream error: {}", err),
                None,
            )
            .map_err(|e| HostError::StreamCreate(e.to_string()))?;

        stream
            .play()
            .map_err(|e| HostError::Playback(e.to_string()))?;
        self.stream = Some(stream);

        Ok(())
    }

    /// Pause the stream if one is running.
    pub fn stop(&mut self) -> Result<(), HostError> {
        if let Some(ref stream) = self.stream {
            stream
                .pause()
                .map_err(|e| HostError::Playback(e.to_string()))?;
        }
        Ok(())
    }
}
