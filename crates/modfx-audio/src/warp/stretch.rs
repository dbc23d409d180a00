use modfx_spec::StretchConfig;
use rayon::prelude::*;

use crate::corners::{find_corners, CornerMask};
use crate::error::{AudioError, AudioResult};
use crate::interp::moving_average;

/// Anchor distances at or below this are treated as level: the segment is
/// shifted onto its target but not scaled.
const MIN_SCALE_RANGE: f64 = 1e-9;

/// Result of [`stretch_corners`].
#[derive(Debug, Clone, PartialEq)]
pub enum StretchOutcome {
    /// Corners were moved onto their canonical values.
    Stretched(Vec<f64>),
    /// Too many corners; the smoothed signal is returned as-is.
    Skipped {
        /// Smoothed, unstretched signal.
        smoothed: Vec<f64>,
        /// Corner count that exceeded the limit.
        n_corners: usize,
    },
}

impl StretchOutcome {
    /// The output signal, whether or not it was stretched.
    pub fn signal(&self) -> &[f64] {
        match self {
            StretchOutcome::Stretched(signal) => signal,
            StretchOutcome::Skipped { smoothed, .. } => smoothed,
        }
    }

    /// Consumes the outcome and returns the output signal.
    pub fn into_signal(self) -> Vec<f64> {
        match self {
            StretchOutcome::Stretched(signal) => signal,
            StretchOutcome::Skipped { smoothed, .. } => smoothed,
        }
    }

    pub fn is_stretched(&self) -> bool {
        matches!(self, StretchOutcome::Stretched(_))
    }
}

/// Rescales each segment between anchors so it ends on the anchor's value.
///
/// Anchors are tops (1.0), bottoms (0.0) and the final sample (its own
/// value). A segment runs from just after the previous anchor up to and
/// including the next; it is shifted to start at zero, scaled by the ratio
/// of target to original anchor distance, then shifted onto its target.
/// Segments between anchors with equal targets are left alone.
fn stretch_to_anchors(x: &[f64], mask: &CornerMask) -> Vec<f64> {
    let Some(&last) = x.last() else {
        return Vec::new();
    };
    let mut anchors: Vec<(usize, f64)> = mask
        .top_indices()
        .into_iter()
        .map(|i| (i, 1.0))
        .chain(mask.bottom_indices().into_iter().map(|i| (i, 0.0)))
        .collect();
    anchors.push((x.len() - 1, last));
    anchors.sort_by_key(|&(i, _)| i);

    let mut out = x.to_vec();
    let mut prev_idx = 0;
    let mut prev_target = x[0];
    for (idx, target) in anchors {
        if idx <= prev_idx {
            continue;
        }
        if prev_target != target {
            let curr_range = (x[prev_idx] - x[idx]).abs();
            let target_range = (prev_target - target).abs();
            let segment = &mut out[prev_idx + 1..=idx];
            let min = segment.iter().copied().fold(f64::INFINITY, f64::min);
            for v in segment.iter_mut() {
                *v -= min;
                if curr_range > MIN_SCALE_RANGE {
                    *v *= target_range / curr_range;
                }
            }
            let shift = target - segment[segment.len() - 1];
            for v in segment.iter_mut() {
                *v += shift;
            }
            // Pin the anchor so rounding in the shift cannot move it.
            segment[segment.len() - 1] = target;
        }
        prev_idx = idx;
        prev_target = target;
    }
    out
}

/// Smooths a mod signal and stretches it so every corner sits on 0.0 or 1.0.
///
/// The smoothing is a valid-mode moving average, so the output has
/// `len - smooth_n_frames + 1` samples. Signals with more than
/// `max_n_corners` corners after smoothing come back as
/// [`StretchOutcome::Skipped`].
pub fn stretch_corners(mod_sig: &[f64], config: &StretchConfig) -> AudioResult<StretchOutcome> {
    config.validate()?;
    if config.smooth_n_frames > mod_sig.len() {
        return Err(AudioError::invalid_param(
            "smooth_n_frames",
            format!(
                "window of {} exceeds signal length {}",
                config.smooth_n_frames,
                mod_sig.len()
            ),
        ));
    }

    let smoothed = moving_average(mod_sig, config.smooth_n_frames);
    let mask = find_corners(&smoothed);
    let n_corners = mask.n_corners();
    if n_corners > config.max_n_corners {
        log::debug!(
            "corner stretch skipped: {} corners exceeds limit of {}",
            n_corners,
            config.max_n_corners
        );
        return Ok(StretchOutcome::Skipped {
            smoothed,
            n_corners,
        });
    }
    Ok(StretchOutcome::Stretched(stretch_to_anchors(&smoothed, &mask)))
}

/// Runs [`stretch_corners`] on every signal of a batch in parallel.
pub fn stretch_corners_batch(
    mod_sigs: &[Vec<f64>],
    config: &StretchConfig,
) -> AudioResult<Vec<StretchOutcome>> {
    mod_sigs
        .par_iter()
        .map(|sig| stretch_corners(sig, config))
        .collect()
}
