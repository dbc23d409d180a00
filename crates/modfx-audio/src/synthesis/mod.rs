//! Mod-signal waveform synthesis.
//!
//! [`make_mod_signal`] renders one canonical shape from a frequency, phase
//! and optional power-law exponent. [`random`] builds jittered batches on top
//! of it.

pub mod random;


use std::f64::consts::{PI, TAU};

use modfx_spec::Shape;

use crate::error::{AudioError, AudioResult};

pub use random::{make_rand_mod_signals, ModSigBaselines};

/// Sign with `sign(0) == 0`, so a square wave sits at 0.5 on its edges.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Renders a mod signal of `n_samples` values.
///
/// The phase accumulator is the running sum of `2pi * freq / sample_rate`
/// offset by `phase`, so the first sample is already one increment in.
/// Values lie in [0, 1] for `exponent == 1`; other exponents apply
/// `value.powf(exponent)` afterwards.
///
/// # Arguments
/// * `n_samples` - Output length, at least 1
/// * `sample_rate` - Frames per second of the mod signal
/// * `freq` - Frequency in Hz, in `(0, sample_rate / 2)`
/// * `phase` - Initial phase in radians, in `[-2pi, 2pi]`
/// * `shape` - Waveform shape
/// * `exponent` - Positive power-law reshape
pub fn make_mod_signal(
    n_samples: usize,
    sample_rate: f64,
    freq: f64,
    phase: f64,
    shape: Shape,
    exponent: f64,
) -> AudioResult<Vec<f64>> {
    if n_samples == 0 {
        return Err(AudioError::invalid_param("n_samples", "must be at least 1"));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(AudioError::invalid_param(
            "sample_rate",
            format!("must be positive, got {}", sample_rate),
        ));
    }
    let nyquist = sample_rate / 2.0;
    if !(freq > 0.0 && freq < nyquist) {
        return Err(AudioError::InvalidFrequency { freq, nyquist });
    }
    if !(-TAU..=TAU).contains(&phase) {
        return Err(AudioError::InvalidPhase { phase });
    }
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(AudioError::invalid_param(
            "exponent",
            format!("must be positive, got {}", exponent),
        ));
    }

    let (freq, phase) = if shape.is_rectified() {
        (freq / 2.0, phase / 2.0)
    } else {
        (freq, phase)
    };

    let increment = TAU * freq / sample_rate;
    let mut acc = 0.0;
    let argument: Vec<f64> = (0..n_samples)
        .map(|_| {
            acc += increment;
            acc + phase
        })
        .collect();
    let saw = |theta: f64| theta.rem_euclid(TAU) / TAU;

    let mut mod_sig: Vec<f64> = match shape {
        Shape::Cos => argument
            .iter()
            .map(|&theta| ((theta + PI).cos() + 1.0) / 2.0)
            .collect(),
        Shape::RectCos => argument
            .iter()
            .map(|&theta| (theta + PI / 2.0).cos().abs())
            .collect(),
        Shape::InvRectCos => argument
            .iter()
            .map(|&theta| 1.0 - theta.cos().abs())
            .collect(),
        Shape::Sqr => argument
            .iter()
            .map(|&theta| (sign((theta + PI).cos()) + 1.0) / 2.0)
            .collect(),
        Shape::Saw => argument.iter().map(|&theta| saw(theta)).collect(),
        Shape::Rsaw => {
            let mut rsaw: Vec<f64> = argument.iter().map(|&theta| 1.0 - saw(theta)).collect();
            rsaw.rotate_right(1);
            rsaw
        }
        Shape::Tri => argument
            .iter()
            .map(|&theta| {
                let tri = 2.0 * saw(theta);
                if tri > 1.0 {
                    2.0 - tri
                } else {
                    tri
                }
            })
            .collect(),
    };

    if exponent != 1.0 {
        for v in &mut mod_sig {
            *v = v.powf(exponent);
        }
    }
    Ok(mod_sig)
}

/// Like [`make_mod_signal`], taking the shape by name.
///
/// Unknown names fail with [`AudioError::UnsupportedShape`].
pub fn make_mod_signal_named(
    n_samples: usize,
    sample_rate: f64,
    freq: f64,
    phase: f64,
    shape: &str,
    exponent: f64,
) -> AudioResult<Vec<f64>> {
    let shape: Shape = shape.parse()?;
    make_mod_signal(n_samples, sample_rate, freq, phase, shape, exponent)
}
