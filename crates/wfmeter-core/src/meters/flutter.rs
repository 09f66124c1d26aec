// SPDX-License-Identifier: LGPL-3.0-or-later

//! The wow and flutter measurement session.
//!
//! [`FlutterMeter`] owns every pipeline stage: the validity gate, the
//! test-tone bandpass, the crossing detector, all four weighting curves,
//! the quasi-peak envelope and the rolling windows. One `process` call
//! advances the measurement by exactly ten seconds (one hundred 100 ms
//! blocks) and publishes results at each one-second boundary.
//!
//! # Algorithm
//!
//! Each 100 ms block is read twice. The first pass scans the raw samples
//! for tone presence; a rejected block advances only the input position,
//! leaving every filter untouched. The second pass isolates the tone,
//! converts each inter-crossing interval into a fractional deviation from
//! the expected half period, weights that deviation, and accumulates the
//! quasi-peak envelope and the sum of squared weighted errors. At each
//! one-second boundary the windows fold (see [`WindowRing`]) and the
//! published results become the five-second maxima plus the running
//! average tone frequency.

use thiserror::Error;

use crate::filters::bank::{self, ToneBandpass, Weighting, WeightingFilter};
use crate::meters::crossing::CrossingDetector;
use crate::meters::envelope::QuasiPeak;
use crate::meters::gate::SignalGate;
use crate::meters::window::WindowRing;

/// 100 ms blocks consumed by one `process` pass.
const BLOCKS_PER_PASS: usize = 100;

/// Latest published measurement values.
///
/// All three stay at zero until the first one-second boundary of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Results {
    /// Maximum one-second RMS flutter over the last five seconds, percent.
    pub rms_percent: f64,
    /// Maximum quasi-peak flutter over the last five seconds.
    pub quasi_peak: f64,
    /// Average measured tone frequency in Hz.
    pub frequency_hz: f64,
}

/// Errors surfaced by [`FlutterMeter::process`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The input holds fewer samples than one full measurement pass.
    #[error("insufficient samples: a pass needs {needed}, got {got}")]
    InsufficientSamples {
        /// Samples required for one ten-second pass.
        needed: usize,
        /// Samples actually provided.
        got: usize,
    },
}

/// Wow and flutter measurement session.
///
/// Configured with the input sample rate and the nominal test-tone
/// frequency; both may be changed through the builder setters followed by
/// [`update_settings`](FlutterMeter::update_settings), which reinitializes
/// the whole session. Sessions are independent; a caller may hold several.
///
/// # Examples
///
/// ```
/// use wfmeter_core::{FlutterMeter, Weighting};
///
/// let mut meter = FlutterMeter::new(48000, 3150.0);
/// assert_eq!(meter.samples_per_pass(), 480_000);
///
/// let silence = vec![0i32; meter.samples_per_pass()];
/// meter.process(&silence, Weighting::Unweighted).unwrap();
/// assert_eq!(meter.results().rms_percent, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FlutterMeter {
    // Parameters
    sample_rate: u32,
    test_frequency: f64,
    dirty: bool,

    // Derived configuration
    samples_per_block: usize,
    ns_per_sample: f64,
    expected_half_period_ns: f64,

    // Pipeline stages
    gate: SignalGate,
    tone: ToneBandpass,
    crossing: CrossingDetector,
    din: WeightingFilter,
    unweighted: WeightingFilter,
    wow: WeightingFilter,
    flutter: WeightingFilter,
    envelope: QuasiPeak,
    window: WindowRing,

    // One-second accumulators
    valid_count: u32,
    interval_sum_ns: f64,

    results: Results,
}

impl FlutterMeter {
    /// Create a fully initialized session.
    ///
    /// A `test_frequency` above half the sample rate is a caller error; the
    /// gate will reject every block of such a configuration.
    pub fn new(sample_rate: u32, test_frequency: f64) -> Self {
        let mut meter = Self {
            sample_rate,
            test_frequency,
            dirty: true,
            samples_per_block: 0,
            ns_per_sample: 0.0,
            expected_half_period_ns: 0.0,
            gate: SignalGate::new(0, 0),
            tone: bank::tone_bandpass(),
            crossing: CrossingDetector::new(0.0),
            din: bank::din(),
            unweighted: bank::unweighted(),
            wow: bank::wow(),
            flutter: bank::flutter(),
            envelope: QuasiPeak::new(),
            window: WindowRing::new(),
            valid_count: 0,
            interval_sum_ns: 0.0,
            results: Results::default(),
        };
        meter.update_settings();
        meter
    }

    /// Set the input sample rate in Hz.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> &mut Self {
        self.sample_rate = sample_rate;
        self.dirty = true;
        self
    }

    /// Set the nominal test-tone frequency in Hz.
    pub fn set_test_frequency(&mut self, test_frequency: f64) -> &mut Self {
        self.test_frequency = test_frequency;
        self.dirty = true;
        self
    }

    /// Reinitialize the session after parameter changes.
    ///
    /// Zeroes the results, resets every filter and detector, clears the
    /// windows and recomputes the derived configuration. A second call
    /// without intervening parameter changes is a no-op, so repeated
    /// initialization cannot perturb a session.
    pub fn update_settings(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        self.samples_per_block = (self.sample_rate / 10) as usize;
        self.ns_per_sample = 1.0e9 / f64::from(self.sample_rate);
        self.expected_half_period_ns = 0.5 * 1.0e9 / self.test_frequency;

        // Accept a crossing count within ±5% of the nominal rate. In
        // 100 ms a tone at `f` Hz crosses zero f/5 times.
        let expected_crossings = self.test_frequency as i32 / 5;
        let min_crossings = (f64::from(expected_crossings) * 0.95) as i32;
        let max_crossings = (f64::from(expected_crossings) * 1.05) as i32;

        self.gate = SignalGate::new(min_crossings, max_crossings);
        self.tone.reset();
        self.crossing = CrossingDetector::new(self.ns_per_sample);
        self.din.reset();
        self.unweighted.reset();
        self.wow.reset();
        self.flutter.reset();
        self.envelope.reset();
        self.window = WindowRing::new();
        self.valid_count = 0;
        self.interval_sum_ns = 0.0;
        self.results = Results::default();
    }

    /// Samples consumed by one ten-second measurement pass.
    pub fn samples_per_pass(&self) -> usize {
        self.samples_per_block * BLOCKS_PER_PASS
    }

    /// Latest published results.
    ///
    /// Zeros before the first one-second boundary. Values persist across
    /// passes until the next boundary overwrites them.
    pub fn results(&self) -> Results {
        self.results
    }

    /// Advance the measurement by one ten-second pass.
    ///
    /// `samples` carries 16-bit PCM values in 32-bit slots; the low 16 bits
    /// are analyzed. Samples beyond the pass length are ignored. The sample
    /// count is validated up front, so a failed call leaves the session
    /// untouched.
    pub fn process(&mut self, samples: &[i32], weighting: Weighting) -> Result<(), ProcessError> {
        if self.dirty {
            self.update_settings();
        }
        if self.samples_per_block == 0 {
            return Ok(());
        }

        let needed = self.samples_per_pass();
        if samples.len() < needed {
            return Err(ProcessError::InsufficientSamples {
                needed,
                got: samples.len(),
            });
        }

        // Frequency accumulators span the whole pass; each publication
        // reports the average since the pass began.
        let mut freq_sum = 0.0f64;
        let mut freq_count = 0u32;

        for block in samples[..needed].chunks_exact(self.samples_per_block) {
            if !self.gate.check(block) {
                continue;
            }

            let mut sum_of_squares = 0.0f64;
            let mut block_peak = 0.0f64;

            for &raw in block {
                let sample = raw as i16;
                let filtered = self.tone.process(f64::from(sample));
                let Some(interval_ns) = self.crossing.advance(filtered) else {
                    continue;
                };

                // Fractional deviation from the expected half period;
                // positive means the tone ran slow.
                let error =
                    (self.expected_half_period_ns - interval_ns) / self.expected_half_period_ns;
                let weighted = match weighting {
                    Weighting::Unweighted => self.unweighted.process(error),
                    Weighting::Din => self.din.process(error),
                    Weighting::Wow => self.wow.process(error),
                    Weighting::Flutter => self.flutter.process(error),
                };

                // Empirical calibration onto the percent-flutter scale.
                let measurement = weighted.abs() * 10000.0 / 85.0;
                block_peak = self.envelope.update(measurement);

                sum_of_squares += weighted * weighted;
                self.valid_count += 1;
                self.interval_sum_ns += interval_ns;

                let average_interval_ns = self.interval_sum_ns / f64::from(self.valid_count);
                freq_sum += 1.0e9 / average_interval_ns / 2.0;
                freq_count += 1;
            }

            // The peak slot records the envelope as it stood at the end of
            // the block; a valid block without crossings records zero.
            if self.window.push_block(sum_of_squares, block_peak) {
                let (max_rms, max_peak) = self.window.complete_second(self.valid_count);
                self.results.rms_percent = max_rms;
                self.results.quasi_peak = max_peak;
                if freq_count > 0 {
                    self.results.frequency_hz = freq_sum / f64::from(freq_count);
                }
                self.valid_count = 0;
                self.interval_sum_ns = 0.0;
            }
        }

        Ok(())
    }
}
