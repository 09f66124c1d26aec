// SPDX-License-Identifier: LGPL-3.0-or-later

//! Command-line front-end for the flutter meter.
//!
//! Reads a WAV recording of a test tone, runs consecutive ten-second
//! measurement passes over it, and prints the final published results.

mod wav;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use wfmeter_core::{FlutterMeter, Weighting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WeightingArg {
    Unweighted,
    Din,
    Wow,
    Flutter,
}

impl From<WeightingArg> for Weighting {
    fn from(arg: WeightingArg) -> Self {
        match arg {
            WeightingArg::Unweighted => Weighting::Unweighted,
            WeightingArg::Din => Weighting::Din,
            WeightingArg::Wow => Weighting::Wow,
            WeightingArg::Flutter => Weighting::Flutter,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wfmeter",
    version,
    about = "Measure wow and flutter of a recorded test tone"
)]
struct Args {
    /// Input WAV file (16-bit PCM; multi-channel files use the first channel)
    input: PathBuf,

    /// Nominal test-tone frequency in Hz
    #[arg(long, default_value_t = 3150.0)]
    tone: f64,

    /// Weighting curve
    #[arg(long, value_enum, default_value = "din")]
    weighting: WeightingArg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();

    let recording = wav::read_first_channel(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        sample_rate = recording.sample_rate,
        samples = recording.samples.len(),
        "loaded recording"
    );

    let mut meter = FlutterMeter::new(recording.sample_rate, args.tone);
    let pass_len = meter.samples_per_pass();
    if pass_len == 0 {
        bail!("invalid sample rate {}", recording.sample_rate);
    }
    if recording.samples.len() < pass_len {
        bail!(
            "recording too short: one ten-second pass needs {pass_len} samples, got {}",
            recording.samples.len()
        );
    }

    let weighting = Weighting::from(args.weighting);
    for (i, pass) in recording.samples.chunks_exact(pass_len).enumerate() {
        meter.process(pass, weighting)?;
        let r = meter.results();
        info!(
            pass = i + 1,
            rms = r.rms_percent,
            peak = r.quasi_peak,
            freq = r.frequency_hz,
            "pass complete"
        );
    }
    let leftover = recording.samples.len() % pass_len;
    if leftover > 0 {
        warn!(samples = leftover, "trailing samples short of a full pass ignored");
    }

    let results = meter.results();
    println!();
    println!("RMS:  {:.4}", results.rms_percent);
    println!("Peak: {:.4}", results.quasi_peak);
    println!("Freq: {:.2} Hz", results.frequency_hz);

    Ok(())
}
