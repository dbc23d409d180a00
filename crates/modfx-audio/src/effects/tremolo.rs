//! Tremolo: amplitude modulation by a mod signal.

use super::params::{EffectParam, ParamDomain};
use crate::buffer::AudioBatch;
use crate::error::AudioResult;

/// Returns `(1 - mix) * x + mix * mod_sig * x`.
///
/// `mod_sig` has one channel (broadcast) or one per channel of `x`, with the
/// same batch size and length. `mix` must be in [0, 1].
pub fn apply_tremolo(
    x: &AudioBatch,
    mod_sig: &AudioBatch,
    mix: &EffectParam,
) -> AudioResult<AudioBatch> {
    x.check_modulator(mod_sig)?;
    let (batch_size, n_channels, _) = x.shape();
    let mix = mix.resolve("mix", ParamDomain::Unit, batch_size)?;

    let mut out = x.clone();
    for (item, &mix) in mix.iter().enumerate() {
        for channel in 0..n_channels {
            let m = mod_sig.broadcast_lane(item, channel);
            for (v, &m) in out.lane_mut(item, channel).iter_mut().zip(m) {
                *v = (1.0 - mix) * *v + mix * m * *v;
            }
        }
    }
    Ok(out)
}
