use modfx_spec::QuasiPeriodicConfig;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::corners::find_corners;
use crate::error::AudioResult;
use crate::interp::linear_interpolate;
use crate::rng::sample_uniform;

/// Resamples one section to a randomly shrunk or grown length.
fn stretch_section(section: &[f64], config: &QuasiPeriodicConfig, rng: &mut Pcg32) -> Vec<f64> {
    let size = section.len();
    let new_size = if rng.gen::<f64>() < config.lr_split {
        let delta = (sample_uniform(rng, config.l_min, config.l_max) * size as f64 + 0.5) as usize;
        size.saturating_sub(delta).max(2)
    } else {
        let delta = (sample_uniform(rng, config.r_min, config.r_max) * size as f64 + 0.5) as usize;
        size + delta
    };
    linear_interpolate(section, new_size)
}

/// Randomly stretches each cycle of a periodic mod signal.
///
/// The signal is cut at whichever corner kind (top or bottom) is more
/// numerous, ties going to bottoms. Each section from the previous cut up to
/// and including the next corner is resampled to a new length and its last
/// sample dropped, so the corner itself opens the next section. The
/// remainder after the last corner is padded by interpolation if the output
/// is short, then everything is truncated to the input length.
///
/// Signals with fewer than two corners of the chosen kind are returned
/// unchanged.
pub fn make_quasi_periodic(
    mod_sig: &[f64],
    config: &QuasiPeriodicConfig,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    config.validate()?;

    let mask = find_corners(mod_sig);
    let corners = if mask.n_top() > mask.n_bottom() {
        mask.top_indices()
    } else {
        mask.bottom_indices()
    };
    if corners.len() < 2 {
        log::debug!(
            "quasi-periodic warp skipped: {} anchor corners in {} samples",
            corners.len(),
            mod_sig.len()
        );
        return Ok(mod_sig.to_vec());
    }

    let orig_len = mod_sig.len();
    let mut out = Vec::with_capacity(orig_len + orig_len / 2);
    let mut prev = 0;
    for idx in corners {
        let section = stretch_section(&mod_sig[prev..=idx], config, rng);
        out.extend_from_slice(&section[..section.len() - 1]);
        prev = idx;
    }

    let remainder = &mod_sig[prev..];
    if out.len() + remainder.len() < orig_len {
        let padded = linear_interpolate(remainder, orig_len - out.len());
        out.extend(padded);
    } else {
        out.extend_from_slice(remainder);
    }
    out.truncate(orig_len);
    Ok(out)
}
