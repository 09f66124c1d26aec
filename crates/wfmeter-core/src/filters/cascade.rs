// SPDX-License-Identifier: LGPL-3.0-or-later

//! Cascaded biquad sections evaluated over a single flat state buffer.
//!
//! Each section contributes two interleaved cells to the buffer. Before a
//! sample is processed the oldest cell is captured and the whole buffer
//! shifts left by one slot; every section then reads its pole state, emits
//! the numerator combination, and rewrites its newer cell. The measurement
//! results depend on this exact ordering, so the recurrence must not be
//! rearranged even where an algebraically equivalent form exists.

/// Coefficients for one second-order section of a cascade.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Pole coefficient applied to the section's captured (oldest) state.
    pub a: f64,
    /// Pole coefficient applied to the section's in-buffer state cell.
    pub b: f64,
    /// Sign of the `2·state` term in the numerator combination: `-1.0` for
    /// sections with the zero pair at DC, `+1.0` for the Nyquist pair.
    pub fir_sign: f64,
}

/// Fixed-coefficient IIR filter built from cascaded second-order sections.
///
/// `LEN` is the state buffer length and must be twice the section count:
/// 4 for the second-order test-tone bandpass, 8 for the fourth-order
/// weighting curves. The state buffer is zeroed at construction and by
/// [`reset`](BiquadCascade::reset); no allocation happens after that.
#[derive(Debug, Clone)]
pub struct BiquadCascade<const LEN: usize> {
    input_scale: f64,
    sections: &'static [Section],
    buf: [f64; LEN],
}

impl<const LEN: usize> BiquadCascade<LEN> {
    /// Create a cascade from a static section table.
    ///
    /// `input_scale` is the unity-passband-gain multiplier applied to the
    /// first section's input.
    pub const fn new(input_scale: f64, sections: &'static [Section]) -> Self {
        assert!(sections.len() * 2 == LEN);
        Self {
            input_scale,
            sections,
            buf: [0.0; LEN],
        }
    }

    /// Zero the state buffer. Idempotent.
    pub fn reset(&mut self) {
        self.buf = [0.0; LEN];
    }

    /// Feed one sample through the cascade and return the filtered value.
    pub fn process(&mut self, val: f64) -> f64 {
        let mut tmp = self.buf[0];
        // Shift left by one; the last slot keeps its stale value until the
        // final section overwrites it.
        self.buf.copy_within(1.., 0);

        let mut acc = val * self.input_scale;
        for (k, s) in self.sections.iter().enumerate() {
            let iir = acc - s.a * tmp - s.b * self.buf[2 * k];
            let fir = tmp + s.fir_sign * (self.buf[2 * k] + self.buf[2 * k]) + iir;
            tmp = self.buf[2 * k + 1];
            self.buf[2 * k + 1] = iir;
            acc = fir;
        }
        acc
    }
}
