//! Modulated delay-line engine for flanger and chorus effects.
//!
//! Each (batch item, channel) lane owns a circular delay buffer. At every
//! sample the mod signal sets a fractional delay; the delayed sample is mixed
//! into the output and fed back into the buffer, making a swept comb filter.

use modfx_spec::FlangerConfig;
use rayon::prelude::*;

use super::delay_line::DelayLine;
use super::params::{FlangerParams, ItemParams};
use crate::buffer::AudioBatch;
use crate::error::{AudioError, AudioResult};

/// Converts milliseconds to a whole number of samples, rounding half up.
fn ms_to_samples(ms: f64, sample_rate: f64) -> usize {
    (ms / 1000.0 * sample_rate + 0.5) as usize
}

/// A flanger/chorus engine sized for fixed batch dimensions.
///
/// Buffers are allocated once in [`FlangerChorus::new`] and zeroed at the
/// start of every [`apply`](FlangerChorus::apply); no state carries over
/// between calls. `apply` takes `&mut self`, so one engine serves one caller
/// at a time.
#[derive(Debug, Clone)]
pub struct FlangerChorus {
    batch_size: usize,
    n_channels: usize,
    n_samples: usize,
    sample_rate: f64,
    max_min_delay_samples: usize,
    max_lfo_delay_samples: usize,
    delay_lines: Vec<DelayLine>,
    out_buf: AudioBatch,
}

impl FlangerChorus {
    /// Creates an engine for `(batch_size, n_channels, n_samples)` buffers.
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `max_min_delay_ms` - Largest static delay in milliseconds
    /// * `max_lfo_delay_ms` - Largest mod-signal-driven delay in milliseconds
    ///
    /// The delay buffer holds the sum of both delays in samples, which must
    /// be at least one sample.
    pub fn new(
        batch_size: usize,
        n_channels: usize,
        n_samples: usize,
        sample_rate: f64,
        max_min_delay_ms: f64,
        max_lfo_delay_ms: f64,
    ) -> AudioResult<Self> {
        if n_channels == 0 || n_samples == 0 {
            return Err(AudioError::invalid_param(
                "n_channels/n_samples",
                format!(
                    "must both be at least 1, got {} and {}",
                    n_channels, n_samples
                ),
            ));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(AudioError::invalid_param(
                "sample_rate",
                format!("must be positive, got {}", sample_rate),
            ));
        }
        for (name, ms) in [
            ("max_min_delay_ms", max_min_delay_ms),
            ("max_lfo_delay_ms", max_lfo_delay_ms),
        ] {
            if !ms.is_finite() || ms < 0.0 {
                return Err(AudioError::invalid_param(
                    name,
                    format!("must be non-negative, got {}", ms),
                ));
            }
        }

        let max_min_delay_samples = ms_to_samples(max_min_delay_ms, sample_rate);
        let max_lfo_delay_samples = ms_to_samples(max_lfo_delay_ms, sample_rate);
        let capacity = max_min_delay_samples + max_lfo_delay_samples;
        if capacity == 0 {
            return Err(AudioError::invalid_param(
                "max_lfo_delay_ms",
                "total delay rounds to zero samples",
            ));
        }

        log::debug!(
            "flanger engine: {}x{}x{} at {} Hz, delay {} + {} samples",
            batch_size,
            n_channels,
            n_samples,
            sample_rate,
            max_min_delay_samples,
            max_lfo_delay_samples
        );

        Ok(Self {
            batch_size,
            n_channels,
            n_samples,
            sample_rate,
            max_min_delay_samples,
            max_lfo_delay_samples,
            delay_lines: vec![DelayLine::new(capacity); batch_size * n_channels],
            out_buf: AudioBatch::zeros(batch_size, n_channels, n_samples),
        })
    }

    /// Creates an engine using the delay bounds of a validated config.
    pub fn from_config(
        batch_size: usize,
        n_channels: usize,
        n_samples: usize,
        sample_rate: f64,
        config: &FlangerConfig,
    ) -> AudioResult<Self> {
        config.validate()?;
        Self::new(
            batch_size,
            n_channels,
            n_samples,
            sample_rate,
            config.max_min_delay_ms,
            config.max_lfo_delay_ms,
        )
    }

    /// Returns `(batch_size, n_channels, n_samples)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batch_size, self.n_channels, self.n_samples)
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Static delay bound in samples.
    pub fn max_min_delay_samples(&self) -> usize {
        self.max_min_delay_samples
    }

    /// Mod-signal delay bound in samples.
    pub fn max_lfo_delay_samples(&self) -> usize {
        self.max_lfo_delay_samples
    }

    /// Delay buffer length per lane.
    pub fn capacity(&self) -> usize {
        self.max_min_delay_samples + self.max_lfo_delay_samples
    }

    /// Instantaneous delay in samples for one item at mod value `m`.
    pub fn delay_samples(&self, params: &ItemParams, m: f64) -> f64 {
        params.min_delay_width * self.max_min_delay_samples as f64
            + params.width * self.max_lfo_delay_samples as f64 * m
    }

    /// Runs the effect over `x` and returns the wet output.
    ///
    /// `x` must match the engine's shape. `mod_sig` has the same batch size
    /// and length with one channel (shared by all channels) or one per
    /// channel, and every value must lie in [0, 1]. The output is
    /// `(1 - mix) * x + mix * (x + depth * delayed)`, clipped to [-1, 1].
    pub fn apply(
        &mut self,
        x: &AudioBatch,
        mod_sig: &AudioBatch,
        params: &FlangerParams,
    ) -> AudioResult<&AudioBatch> {
        if x.shape() != self.shape() {
            return Err(AudioError::shape_mismatch(
                "x",
                format!("{:?}", self.shape()),
                format!("{:?}", x.shape()),
            ));
        }
        x.check_modulator(mod_sig)?;
        if let Some(&bad) = mod_sig
            .as_slice()
            .iter()
            .find(|v| !(0.0..=1.0).contains(*v))
        {
            return Err(AudioError::invalid_param(
                "mod_sig",
                format!("values must be in [0, 1], got {}", bad),
            ));
        }
        let items = params.resolve(self.batch_size)?;

        for line in &mut self.delay_lines {
            line.clear();
        }
        self.out_buf.fill(0.0);

        let n_channels = self.n_channels;
        let max_min = self.max_min_delay_samples as f64;
        let max_lfo = self.max_lfo_delay_samples as f64;
        self.out_buf
            .as_mut_slice()
            .par_chunks_mut(self.n_samples)
            .zip(self.delay_lines.par_iter_mut())
            .enumerate()
            .for_each(|(lane, (out, line))| {
                let (item, channel) = (lane / n_channels, lane % n_channels);
                let p = &items[item];
                let dry = x.lane(item, channel);
                let m = mod_sig.broadcast_lane(item, channel);

                // The time loop is a recurrence through the delay line.
                for t in 0..dry.len() {
                    let delay = p.min_delay_width * max_min + p.width * max_lfo * m[t];
                    let delayed = line.read_delayed(t, delay);
                    line.write(t, dry[t] + p.feedback * delayed);
                    out[t] = dry[t] + p.depth * delayed;
                }
                for (o, &d) in out.iter_mut().zip(dry) {
                    *o = ((1.0 - p.mix) * d + p.mix * *o).clamp(-1.0, 1.0);
                }
            });

        Ok(&self.out_buf)
    }
}
