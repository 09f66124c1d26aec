// SPDX-License-Identifier: LGPL-3.0-or-later

//! # wfmeter-core
//!
//! Wow and flutter measurement for recorded test tones.
//!
//! The meter quantifies short-term speed variations of an analog playback
//! chain by analyzing the timing of zero crossings of a known test tone
//! (typically 3150 Hz). Each one-second boundary publishes three values:
//! RMS flutter (percent), quasi-peak flutter, and the measured average tone
//! frequency in Hz.
//!
//! - **Filters**: fixed-coefficient biquad cascades — a bandpass that
//!   isolates the test tone plus four weighting curves (unweighted,
//!   DIN 45507, wow, flutter)
//! - **Meters**: the [`FlutterMeter`] session driving signal gating,
//!   crossing detection, quasi-peak envelope tracking and windowed RMS
//!   aggregation over a rolling five-second history
//!
//! ## Examples
//!
//! ```
//! use wfmeter_core::{FlutterMeter, Weighting};
//!
//! let mut meter = FlutterMeter::new(48000, 3150.0);
//!
//! // Ten seconds of a clean 3150 Hz tone at half scale.
//! let tone: Vec<i32> = (0..480_000)
//!     .map(|i| {
//!         let t = i as f64 / 48000.0;
//!         (16000.0 * (2.0 * std::f64::consts::PI * 3150.0 * t).sin()) as i32
//!     })
//!     .collect();
//!
//! meter.process(&tone, Weighting::Din).unwrap();
//! let results = meter.results();
//! assert!(results.rms_percent < 0.05);
//! assert!((results.frequency_hz - 3150.0).abs() < 1.0);
//! ```

pub mod filters;
pub mod meters;

pub use filters::bank::Weighting;
pub use meters::flutter::{FlutterMeter, ProcessError, Results};
