// SPDX-License-Identifier: LGPL-3.0-or-later

//! C ABI adapter for the flutter meter.
//!
//! Exposes the measurement core with the loadable-library surface existing
//! hosts expect: `flutterMeter_init`, `process_samples` and `get_results`
//! operate on one hidden global session. The Rust API in `wfmeter-core`
//! remains the way to hold several independent sessions.
//!
//! Until `flutterMeter_init` is called the hidden session has a zero
//! sample rate, so `process_samples` succeeds without doing anything and
//! `get_results` reports zeros.

use std::ffi::c_int;
use std::slice;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use wfmeter_core::{FlutterMeter, Weighting};

static METER: Lazy<Mutex<FlutterMeter>> = Lazy::new(|| Mutex::new(FlutterMeter::new(0, 3150.0)));

/// Initialize the global session.
///
/// Negative sample rates are treated as zero, which leaves the session in
/// its no-op state.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn flutterMeter_init(sample_rate: c_int, test_frequency: f64) {
    let mut meter = METER.lock().unwrap();
    meter
        .set_sample_rate(sample_rate.max(0) as u32)
        .set_test_frequency(test_frequency)
        .update_settings();
}

/// Advance the global session by one ten-second measurement pass.
///
/// `filter_type` selects the weighting curve: 0 = unweighted, 1 = DIN,
/// 2 = wow, 3 = flutter; anything else falls back to unweighted. Returns 0
/// on success, -1 when `samples` is null, `num_samples` is negative, or the
/// buffer is shorter than one pass.
///
/// # Safety
///
/// `samples` must point to `num_samples` readable `c_int` values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn process_samples(
    samples: *const c_int,
    num_samples: c_int,
    filter_type: c_int,
) -> c_int {
    if samples.is_null() || num_samples < 0 {
        return -1;
    }
    let buf = unsafe { slice::from_raw_parts(samples, num_samples as usize) };

    let mut meter = METER.lock().unwrap();
    match meter.process(buf, Weighting::from(filter_type)) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Copy the latest published results into the caller's slots.
///
/// Null output pointers are skipped.
///
/// # Safety
///
/// Each non-null pointer must reference a writable `f64`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn get_results(peak: *mut f64, rms: *mut f64, freq: *mut f64) {
    let results = METER.lock().unwrap().results();
    unsafe {
        if !peak.is_null() {
            *peak = results.quasi_peak;
        }
        if !rms.is_null() {
            *rms = results.rms_percent;
        }
        if !freq.is_null() {
            *freq = results.frequency_hz;
        }
    }
}
