// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fixed-coefficient IIR filters for flutter measurement.
//!
//! - **BiquadCascade**: cascaded second-order sections over a flat state
//!   buffer, the shared evaluation core of every filter in the bank
//! - **bank**: the five measurement filters — test-tone bandpass plus the
//!   unweighted, DIN, wow and flutter weighting curves

pub mod bank;
pub mod cascade;

pub use bank::Weighting;
pub use cascade::BiquadCascade;
