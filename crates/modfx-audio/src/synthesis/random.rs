//! Batched randomized mod-signal synthesis.

use std::f64::consts::{PI, TAU};

use modfx_spec::{RandModSigConfig, Shape};
use rand_pcg::Pcg32;
use rayon::prelude::*;

use super::make_mod_signal;
use crate::error::{AudioError, AudioResult};
use crate::rng::{choice, sample_uniform};

/// Optional per-item baselines for [`make_rand_mod_signals`].
///
/// A present baseline is jittered (frequency, phase) or used as-is (shape);
/// a missing one is drawn independently for every item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModSigBaselines {
    /// Baseline frequency per item, in Hz.
    pub freq: Option<Vec<f64>>,
    /// Baseline phase per item, in radians.
    pub phase: Option<Vec<f64>>,
    /// Fixed shape per item.
    pub shape: Option<Vec<Shape>>,
}

impl ModSigBaselines {
    fn check_len<T>(name: &str, values: &Option<Vec<T>>, batch_size: usize) -> AudioResult<()> {
        match values {
            Some(v) if v.len() != batch_size => Err(AudioError::shape_mismatch(
                name,
                format!("{} items", batch_size),
                format!("{} items", v.len()),
            )),
            _ => Ok(()),
        }
    }
}

/// Draws `(freq, phase, shape)` for item `idx`.
fn draw_item(
    idx: usize,
    config: &RandModSigConfig,
    baselines: &ModSigBaselines,
    rng: &mut Pcg32,
) -> AudioResult<(f64, f64, Shape)> {
    let phase = match &baselines.phase {
        Some(phases) => {
            let mut phase = phases[idx];
            if config.phase_error > 0.0 {
                phase += sample_uniform(rng, -1.0, 1.0) * PI * config.phase_error;
                phase = phase.rem_euclid(TAU);
            }
            phase
        }
        None => sample_uniform(rng, 0.0, TAU),
    };

    let freq = match &baselines.freq {
        Some(freqs) => {
            let mut freq = freqs[idx];
            if config.freq_error > 0.0 {
                freq *= sample_uniform(rng, 1.0 - config.freq_error, 1.0 + config.freq_error);
                freq = freq.clamp(config.freq_min, config.freq_max);
            }
            freq
        }
        None => sample_uniform(rng, config.freq_min, config.freq_max),
    };

    let shape = match &baselines.shape {
        Some(shapes) => shapes[idx],
        None => *choice(rng, &config.shapes)
            .ok_or_else(|| AudioError::invalid_param("shapes", "must not be empty"))?,
    };

    Ok((freq, phase, shape))
}

/// Synthesizes `batch_size` mod signals with randomized frequency, phase and
/// shape.
///
/// All random draws happen up front, in item order, from `rng`; rendering
/// then runs in parallel. The same seed therefore always yields the same
/// batch regardless of thread count.
pub fn make_rand_mod_signals(
    batch_size: usize,
    n_samples: usize,
    sample_rate: f64,
    config: &RandModSigConfig,
    baselines: &ModSigBaselines,
    rng: &mut Pcg32,
) -> AudioResult<Vec<Vec<f64>>> {
    config.validate()?;
    ModSigBaselines::check_len("freq", &baselines.freq, batch_size)?;
    ModSigBaselines::check_len("phase", &baselines.phase, batch_size)?;
    ModSigBaselines::check_len("shape", &baselines.shape, batch_size)?;

    let draws = (0..batch_size)
        .map(|idx| draw_item(idx, config, baselines, rng))
        .collect::<AudioResult<Vec<_>>>()?;

    draws
        .into_par_iter()
        .map(|(freq, phase, shape)| make_mod_signal(n_samples, sample_rate, freq, phase, shape, 1.0))
        .collect()
}
