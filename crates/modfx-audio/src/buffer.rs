//! Dense (batch, channel, sample) audio buffers.

use crate::error::{AudioError, AudioResult};

/// A batch of multichannel audio stored as one contiguous row-major array.
///
/// Each (batch item, channel) pair is a "lane" of `n_samples` consecutive
/// values. Mod-signal batches use the same type with one channel, which
/// broadcasts across the channels of the audio it modulates.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBatch {
    batch_size: usize,
    n_channels: usize,
    n_samples: usize,
    data: Vec<f64>,
}

impl AudioBatch {
    /// Creates a zero-filled batch.
    pub fn zeros(batch_size: usize, n_channels: usize, n_samples: usize) -> Self {
        Self {
            batch_size,
            n_channels,
            n_samples,
            data: vec![0.0; batch_size * n_channels * n_samples],
        }
    }

    /// Wraps existing row-major data.
    pub fn from_vec(
        batch_size: usize,
        n_channels: usize,
        n_samples: usize,
        data: Vec<f64>,
    ) -> AudioResult<Self> {
        let expected = batch_size * n_channels * n_samples;
        if data.len() != expected {
            return Err(AudioError::shape_mismatch(
                "audio batch",
                format!("{} values", expected),
                format!("{} values", data.len()),
            ));
        }
        Ok(Self {
            batch_size,
            n_channels,
            n_samples,
            data,
        })
    }

    /// Builds a single-channel batch from one row per batch item.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> AudioResult<Self> {
        let n_samples = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * n_samples);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != n_samples {
                return Err(AudioError::shape_mismatch(
                    format!("row {}", idx),
                    format!("{} samples", n_samples),
                    format!("{} samples", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), 1, n_samples, data)
    }

    /// Returns `(batch_size, n_channels, n_samples)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batch_size, self.n_channels, self.n_samples)
    }

    /// Number of batch items.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of channels per item.
    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Number of samples per lane.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Samples for one (item, channel) lane.
    pub fn lane(&self, item: usize, channel: usize) -> &[f64] {
        let start = (item * self.n_channels + channel) * self.n_samples;
        &self.data[start..start + self.n_samples]
    }

    /// Mutable samples for one (item, channel) lane.
    pub fn lane_mut(&mut self, item: usize, channel: usize) -> &mut [f64] {
        let start = (item * self.n_channels + channel) * self.n_samples;
        &mut self.data[start..start + self.n_samples]
    }

    /// Lane of a mod-signal batch for `(item, channel)`, broadcasting a
    /// single-channel batch across every channel.
    pub fn broadcast_lane(&self, item: usize, channel: usize) -> &[f64] {
        if self.n_channels == 1 {
            self.lane(item, 0)
        } else {
            self.lane(item, channel)
        }
    }

    /// Iterates over lanes in (item, channel) order.
    pub fn lanes(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_samples.max(1))
    }

    /// Copies each lane into its own vector.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.lanes().map(<[f64]>::to_vec).collect()
    }

    /// Flat row-major view of the data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flat row-major view of the data.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Sets every sample to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Checks that `mod_sig` can modulate this batch: same batch size and
    /// lane length, and either one channel or a matching channel count.
    pub fn check_modulator(&self, mod_sig: &AudioBatch) -> AudioResult<()> {
        if mod_sig.batch_size != self.batch_size || mod_sig.n_samples != self.n_samples {
            return Err(AudioError::shape_mismatch(
                "mod_sig",
                format!("({}, _, {})", self.batch_size, self.n_samples),
                format!("({}, _, {})", mod_sig.batch_size, mod_sig.n_samples),
            ));
        }
        if mod_sig.n_channels != 1 && mod_sig.n_channels != self.n_channels {
            return Err(AudioError::shape_mismatch(
                "mod_sig channels",
                format!("1 or {}", self.n_channels),
                mod_sig.n_channels,
            ));
        }
        Ok(())
    }
}
