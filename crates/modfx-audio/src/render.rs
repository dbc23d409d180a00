//! Batch rendering of flanger training examples.
//!
//! Ties the pieces together the way a data pipeline consumes them: draw
//! per-item effect parameters from a [`FlangerConfig`], bring the mod signal
//! to audio rate, run the engine and hand back everything needed downstream.

use modfx_spec::FlangerConfig;
use rand_pcg::Pcg32;

use crate::buffer::AudioBatch;
use crate::effects::{FlangerChorus, FlangerParams, ItemParams};
use crate::error::{AudioError, AudioResult};
use crate::interp::linear_interpolate;
use crate::rng::sample_uniform;

/// Dry audio, wet audio, the audio-rate mod signal and the parameters used.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBatch {
    pub dry: AudioBatch,
    pub wet: AudioBatch,
    /// Mod signal at the audio sample count, one channel.
    pub mod_sig: AudioBatch,
    /// Parameters drawn for each batch item.
    pub params: Vec<ItemParams>,
}

/// Draws one set of effect parameters per batch item from `config`.
///
/// Items are drawn in order, each drawing feedback, min_delay_width, width,
/// depth and mix in that order.
pub fn sample_flanger_params(
    config: &FlangerConfig,
    batch_size: usize,
    rng: &mut Pcg32,
) -> AudioResult<Vec<ItemParams>> {
    config.validate()?;
    Ok((0..batch_size)
        .map(|_| ItemParams {
            feedback: sample_uniform(rng, config.feedback.min, config.feedback.max),
            min_delay_width: sample_uniform(
                rng,
                config.min_delay_width.min,
                config.min_delay_width.max,
            ),
            width: sample_uniform(rng, config.width.min, config.width.max),
            depth: sample_uniform(rng, config.depth.min, config.depth.max),
            mix: sample_uniform(rng, config.mix.min, config.mix.max),
        })
        .collect())
}

/// Renders one batch through `engine` with freshly sampled parameters.
///
/// `mod_sigs` holds one mod signal per batch item at any frame rate; each is
/// resampled to the audio length with endpoint-preserving interpolation when
/// the lengths differ.
pub fn render_flanger_batch(
    engine: &mut FlangerChorus,
    dry: AudioBatch,
    mod_sigs: &[Vec<f64>],
    config: &FlangerConfig,
    rng: &mut Pcg32,
) -> AudioResult<RenderedBatch> {
    let (batch_size, _, n_samples) = dry.shape();
    if mod_sigs.len() != batch_size {
        return Err(AudioError::shape_mismatch(
            "mod_sigs",
            format!("{} signals", batch_size),
            format!("{} signals", mod_sigs.len()),
        ));
    }

    let rows: Vec<Vec<f64>> = mod_sigs
        .iter()
        .map(|sig| {
            if sig.len() == n_samples {
                sig.clone()
            } else {
                linear_interpolate(sig, n_samples)
            }
        })
        .collect();
    let mod_sig = AudioBatch::from_vec(batch_size, 1, n_samples, rows.concat())?;

    let params = sample_flanger_params(config, batch_size, rng)?;
    log::debug!(
        "rendering flanger batch: {} items, {} samples",
        batch_size,
        n_samples
    );
    let wet = engine
        .apply(&dry, &mod_sig, &FlangerParams::from_items(&params))?
        .clone();

    Ok(RenderedBatch {
        dry,
        wet,
        mod_sig,
        params,
    })
}
