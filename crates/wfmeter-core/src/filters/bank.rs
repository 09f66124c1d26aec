// SPDX-License-Identifier: LGPL-3.0-or-later

//! The five fixed filters of the flutter meter.
//!
//! One second-order bandpass isolates the test tone before crossing
//! detection; four fourth-order Bessel bandpasses weight the recovered
//! timing-error sequence:
//!
//! - **Unweighted**: BpBe4/0.3-200 (order 4, -3.01 dB at 0.3 and 200 Hz)
//! - **DIN**: DIN 45507 perceptual weighting
//! - **Wow**: BpBe4/0.3-6, low-frequency speed drift
//! - **Flutter**: BpBe4/6-200, high-frequency modulation
//!
//! The coefficient tables are the sole source of truth for the meter's
//! numerics; each input scale encodes unity passband gain.

use super::cascade::{BiquadCascade, Section};

/// State buffer length of the second-order test-tone bandpass.
pub const TONE_BANDPASS_LEN: usize = 4;

/// State buffer length of the fourth-order weighting curves.
pub const WEIGHTING_LEN: usize = 8;

/// The test-tone isolation bandpass.
pub type ToneBandpass = BiquadCascade<TONE_BANDPASS_LEN>;

/// A timing-error weighting curve.
pub type WeightingFilter = BiquadCascade<WEIGHTING_LEN>;

/// Weighting curve selector.
///
/// Raw integer selectors (as used across the loadable-library boundary) map
/// 0/1/2/3 to the variants below; anything else falls back to
/// [`Weighting::Unweighted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Flat 0.3–200 Hz band, no perceptual weighting.
    #[default]
    Unweighted,
    /// DIN 45507 weighting.
    Din,
    /// Low-frequency (0.3–6 Hz) speed drift.
    Wow,
    /// High-frequency (6–200 Hz) modulation.
    Flutter,
}

impl From<i32> for Weighting {
    fn from(raw: i32) -> Self {
        match raw {
            1 => Self::Din,
            2 => Self::Wow,
            3 => Self::Flutter,
            _ => Self::Unweighted,
        }
    }
}

const TONE_BANDPASS_SCALE: f64 = 0.001207405190260069;

const TONE_BANDPASS_SECTIONS: [Section; 2] = [
    Section {
        a: 0.9483625336008361,
        b: -1.73410899821474,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9533938855978508,
        b: -1.781298800713404,
        fir_sign: 1.0,
    },
];

const DIN_SCALE: f64 = 9.886712475608222e-7;

const DIN_SECTIONS: [Section; 4] = [
    Section {
        a: 0.9718381574433894,
        b: -1.971551266567659,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9982440100378892,
        b: -1.998242909436813,
        fir_sign: 1.0,
    },
    Section {
        a: 0.6434545131997782,
        b: -1.591050960239724,
        fir_sign: 1.0,
    },
    Section {
        a: 0.9997284329050403,
        b: -1.999728408318806,
        fir_sign: -1.0,
    },
];

const UNWEIGHTED_SCALE: f64 = 0.0003306520826380572;

const UNWEIGHTED_SECTIONS: [Section; 4] = [
    Section {
        a: 0.6753463035083248,
        b: -1.591483463373453,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9997682212465883,
        b: -1.999768186333123,
        fir_sign: -1.0,
    },
    Section {
        a: 0.5771462662841257,
        b: -1.514102287557188,
        fir_sign: 1.0,
    },
    Section {
        a: 0.9995984565721876,
        b: -1.999598412629212,
        fir_sign: 1.0,
    },
];

const WOW_SCALE: f64 = 3.386435216458736e-10;

const WOW_SECTIONS: [Section; 4] = [
    Section {
        a: 0.9889822559361133,
        b: -1.988898714745282,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9997639015233543,
        b: -1.999763863368945,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9849666019626395,
        b: -1.984903954482672,
        fir_sign: 1.0,
    },
    Section {
        a: 0.9995704510105757,
        b: -1.999570400238568,
        fir_sign: 1.0,
    },
];

const FLUTTER_SCALE: f64 = 0.0002980764585582655;

const FLUTTER_SECTIONS: [Section; 4] = [
    Section {
        a: 0.6858715731999449,
        b: -1.605649703918556,
        fir_sign: -1.0,
    },
    Section {
        a: 0.9953215690037556,
        b: -1.995306892110805,
        fir_sign: -1.0,
    },
    Section {
        a: 0.5910983651395704,
        b: -1.532453681510474,
        fir_sign: 1.0,
    },
    Section {
        a: 0.9916845997627537,
        b: -1.991665582083071,
        fir_sign: 1.0,
    },
];

/// Bandpass centered on the test tone, applied before crossing detection.
pub fn tone_bandpass() -> ToneBandpass {
    BiquadCascade::new(TONE_BANDPASS_SCALE, &TONE_BANDPASS_SECTIONS)
}

/// DIN 45507 weighting curve.
pub fn din() -> WeightingFilter {
    BiquadCascade::new(DIN_SCALE, &DIN_SECTIONS)
}

/// Flat 0.3–200 Hz curve.
pub fn unweighted() -> WeightingFilter {
    BiquadCascade::new(UNWEIGHTED_SCALE, &UNWEIGHTED_SECTIONS)
}

/// Wow curve, 0.3–6 Hz.
pub fn wow() -> WeightingFilter {
    BiquadCascade::new(WOW_SCALE, &WOW_SECTIONS)
}

/// Flutter curve, 6–200 Hz.
pub fn flutter() -> WeightingFilter {
    BiquadCascade::new(FLUTTER_SCALE, &FLUTTER_SECTIONS)
}
