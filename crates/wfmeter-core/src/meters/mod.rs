// SPDX-License-Identifier: LGPL-3.0-or-later

//! Flutter metering stages.
//!
//! - **SignalGate**: per-100 ms signal validity check
//! - **CrossingDetector**: sub-sample zero-crossing timing
//! - **QuasiPeak**: dual-rate peak envelope
//! - **WindowRing**: rolling one-second RMS and five-second history
//! - **FlutterMeter**: the measurement session tying the stages together

pub mod crossing;
pub mod envelope;
pub mod flutter;
pub mod gate;
pub mod window;

pub use crossing::CrossingDetector;
pub use envelope::QuasiPeak;
pub use flutter::FlutterMeter;
pub use gate::SignalGate;
pub use window::WindowRing;
