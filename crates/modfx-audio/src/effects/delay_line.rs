//! Circular delay buffer addressed by absolute write position.

/// A fixed-capacity ring buffer with fractional reads.
///
/// The owner drives positions explicitly: sample `t` is written at
/// `t % capacity` and a delay of `d` samples reads `d` positions behind that.
#[derive(Debug, Clone)]
pub struct DelayLine {
    buffer: Vec<f64>,
}

impl DelayLine {
    /// Creates a zeroed delay line. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Zeroes the buffer without reallocating.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
    }

    /// Stores `sample` at `pos`, wrapping around the capacity.
    pub fn write(&mut self, pos: usize, sample: f64) {
        let len = self.buffer.len();
        self.buffer[pos % len] = sample;
    }

    /// Reads the sample stored at `pos`, wrapping around the capacity.
    pub fn read(&self, pos: usize) -> f64 {
        self.buffer[pos % self.buffer.len()]
    }

    /// Reads at a fractional position, blending `floor(pos)` and the next
    /// slot (wrapping) by the fractional part.
    pub fn read_interpolated(&self, pos: f64) -> f64 {
        let idx = pos.floor();
        let frac = pos - idx;
        let idx = idx as usize;
        self.read(idx) * (1.0 - frac) + self.read(idx + 1) * frac
    }

    /// Reads `delay_samples` behind `write_pos`.
    ///
    /// A delay equal to the capacity lands on `write_pos` itself, which still
    /// holds the sample written one full cycle earlier.
    pub fn read_delayed(&self, write_pos: usize, delay_samples: f64) -> f64 {
        let cap = self.buffer.len() as f64;
        let pos = (write_pos as f64 - delay_samples + cap).rem_euclid(cap);
        self.read_interpolated(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_line_basic() {
        let mut dl = DelayLine::new(10);

        for t in 0..5 {
            dl.write(t, t as f64);
        }

        // One sample behind position 5 is the last written sample
        assert!((dl.read_delayed(5, 1.0) - 4.0).abs() < 1e-10);

        // Five samples behind is the first written sample
        assert!((dl.read_delayed(5, 5.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_delay_line_interpolation() {
        let mut dl = DelayLine::new(10);

        dl.write(0, 0.0);
        dl.write(1, 1.0);
        dl.write(2, 2.0);

        // Halfway between delay 1 (2.0) and delay 2 (1.0)
        let val = dl.read_delayed(3, 1.5);
        assert!((val - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_delay_line_interpolation_wraps() {
        let mut dl = DelayLine::new(4);
        dl.write(3, 1.0);
        dl.write(4, 3.0);

        // Slot 3 blends with slot 0 (position 4 wrapped)
        assert!((dl.read_interpolated(3.25) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_delay_line_full_capacity_delay() {
        let mut dl = DelayLine::new(4);
        for t in 0..4 {
            dl.write(t, t as f64 + 1.0);
        }

        // Before position 4 is overwritten it holds the sample from t = 0
        assert!((dl.read_delayed(4, 4.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_delay_line_clear() {
        let mut dl = DelayLine::new(4);
        for t in 0..10 {
            dl.write(t, 1.0);
        }
        dl.clear();
        assert_eq!(dl.capacity(), 4);
        assert!((0..4).all(|pos| dl.read(pos) == 0.0));
    }
}
