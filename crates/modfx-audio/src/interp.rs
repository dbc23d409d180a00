//! Resampling and smoothing of 1-D control signals.

/// Resamples `x` to `new_len` points with linear interpolation.
///
/// Endpoints are preserved: the first and last output samples equal the
/// first and last input samples exactly. An empty input yields zeros.
pub fn linear_interpolate(x: &[f64], new_len: usize) -> Vec<f64> {
    if new_len == 0 {
        return Vec::new();
    }
    match x.len() {
        0 => return vec![0.0; new_len],
        1 => return vec![x[0]; new_len],
        _ => {}
    }
    if new_len == 1 {
        return vec![x[0]];
    }

    let last = x.len() - 1;
    let denom = (new_len - 1) as f64;
    (0..new_len)
        .map(|i| {
            // Multiply before dividing so the final position is exactly `last`.
            let pos = (i * last) as f64 / denom;
            let idx = (pos.floor() as usize).min(last);
            let frac = pos - idx as f64;
            let next = (idx + 1).min(last);
            x[idx] * (1.0 - frac) + x[next] * frac
        })
        .collect()
}

/// Moving average over windows of `window` samples ("valid" mode).
///
/// The output has `len - window + 1` samples; a window of 0 or 1 returns the
/// input unchanged and a window longer than the input returns nothing.
pub fn moving_average(x: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return x.to_vec();
    }
    x.windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
