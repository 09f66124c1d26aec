// SPDX-License-Identifier: LGPL-3.0-or-later

//! WAV decoding for the meter front-end.
//!
//! Only 16-bit integer PCM is accepted; multi-channel recordings are
//! reduced to their first channel, which is where the test tone lives on
//! standard alignment media.

use std::path::Path;

use anyhow::{Result, bail};

/// A decoded recording ready for measurement.
#[derive(Debug)]
pub struct Recording {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// First-channel samples, one 16-bit value per 32-bit slot.
    pub samples: Vec<i32>,
}

/// Read a 16-bit integer PCM WAV file, keeping only the first channel.
pub fn read_first_channel(path: &Path) -> Result<Recording> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "unsupported format: {}-bit {:?}; only 16-bit integer PCM is supported",
            spec.bits_per_sample,
            spec.sample_format
        );
    }
    let channels = usize::from(spec.channels);
    if channels == 0 {
        bail!("WAV file declares zero channels");
    }

    let samples = reader
        .samples::<i16>()
        .step_by(channels)
        .map(|s| s.map(i32::from))
        .collect::<hound::Result<Vec<i32>>>()?;

    Ok(Recording {
        sample_rate: spec.sample_rate,
        samples,
    })
}
