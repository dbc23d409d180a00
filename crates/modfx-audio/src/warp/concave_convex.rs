use modfx_spec::{ConcaveConvexConfig, Shape};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::corners::find_corners;
use crate::error::AudioResult;
use crate::rng::sample_uniform;
use crate::synthesis::make_mod_signal;

/// Synthesizes a triangle wave and raises each ramp to its own exponent.
///
/// Ramps are delimited by the wave's corners (tops and bottoms combined).
/// Each ramp draws a concave exponent with probability `concave_prob`,
/// otherwise a convex one.
pub fn make_concave_convex_mod_sig(
    n_samples: usize,
    sample_rate: f64,
    freq: f64,
    phase: f64,
    config: &ConcaveConvexConfig,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    config.validate()?;
    let mut mod_sig = make_mod_signal(n_samples, sample_rate, freq, phase, Shape::Tri, 1.0)?;

    let mut bounds = find_corners(&mod_sig).combined_indices();
    bounds.push(n_samples);

    let mut prev = 0;
    for idx in bounds {
        let range = if rng.gen::<f64>() < config.concave_prob {
            config.concave
        } else {
            config.convex
        };
        let exponent = sample_uniform(rng, range.min, range.max);
        for v in &mut mod_sig[prev..idx] {
            *v = v.powf(exponent);
        }
        prev = idx;
    }
    Ok(mod_sig)
}
