use modfx_spec::Shape;
use rand_pcg::Pcg32;

use crate::corners::find_corners;
use crate::error::{AudioError, AudioResult};
use crate::rng::choice;
use crate::synthesis::make_mod_signal;

fn pick_shape(rng: &mut Pcg32, shapes: &[Shape]) -> AudioResult<Shape> {
    choice(rng, shapes)
        .copied()
        .ok_or_else(|| AudioError::invalid_param("shapes", "must not be empty"))
}

/// Synthesizes a base signal and gives every cycle its own random shape.
///
/// Each section between consecutive bottom corners (both ends inclusive) is
/// overwritten with exactly one cycle of a freshly drawn shape, rendered at
/// one sample per frame so the cycle fits the section length.
pub fn make_combined_mod_sig(
    n_samples: usize,
    sample_rate: f64,
    freq: f64,
    phase: f64,
    shapes: &[Shape],
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    let shape = pick_shape(rng, shapes)?;
    let mut mod_sig = make_mod_signal(n_samples, sample_rate, freq, phase, shape, 1.0)?;

    let bottoms = find_corners(&mod_sig).bottom_indices();
    for pair in bottoms.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let section_len = end - start + 1;
        let shape = pick_shape(rng, shapes)?;
        // Consecutive bottoms are at least two samples apart, so a one-cycle
        // section always has at least three samples and stays below Nyquist.
        let section = make_mod_signal(section_len, section_len as f64, 1.0, 0.0, shape, 1.0)?;
        mod_sig[start..=end].copy_from_slice(&section);
    }
    Ok(mod_sig)
}
