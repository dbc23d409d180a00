//! Lossy conversion between mod signals and corner masks.

use rayon::prelude::*;

use super::{find_corners, CornerMask};
use crate::interp::linear_interpolate;

/// Resamples each signal to `n_frames` and detects its corners.
pub fn mod_sig_to_corners(mod_sigs: &[Vec<f64>], n_frames: usize) -> Vec<CornerMask> {
    mod_sigs
        .par_iter()
        .map(|sig| find_corners(&linear_interpolate(sig, n_frames)))
        .collect()
}

/// Rebuilds a piecewise-linear mod signal from its corners.
///
/// Tops anchor at 1.0 and bottoms at 0.0; the last sample repeats the value
/// of the last corner. Samples before the first corner stay at 0.0, and a
/// mask with no corners decodes to all zeros.
pub fn corners_to_mod_sig(mask: &CornerMask) -> Vec<f64> {
    let n = mask.len();
    let mut mod_sig = vec![0.0; n];

    let mut anchors: Vec<(usize, f64)> = mask
        .top
        .iter()
        .zip(&mask.bottom)
        .enumerate()
        .filter_map(|(i, (&t, &b))| match (t, b) {
            (true, _) => Some((i, 1.0)),
            (false, true) => Some((i, 0.0)),
            _ => None,
        })
        .collect();
    let Some(&(last_idx, last_val)) = anchors.last() else {
        return mod_sig;
    };
    if last_idx + 1 < n {
        anchors.push((n - 1, last_val));
    }

    for pair in anchors.windows(2) {
        let (l_idx, l_val) = pair[0];
        let (r_idx, r_val) = pair[1];
        let span = (r_idx - l_idx) as f64;
        for (j, v) in mod_sig[l_idx..=r_idx].iter_mut().enumerate() {
            *v = l_val + (r_val - l_val) * (j as f64 / span);
        }
    }
    // Single-corner masks still mark their anchor.
    mod_sig[anchors[0].0] = anchors[0].1;
    mod_sig
}
