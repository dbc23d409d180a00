//! Corner (local extremum) detection and the corner codec.
//!
//! A corner is an interior sample where the first difference changes sign:
//! a "top" where the signal stops rising, a "bottom" where it stops falling.
//! Detection compares the difference on each side of a sample, so index 0
//! and the last index can never be corners.

pub mod codec;


use rayon::prelude::*;

pub use codec::{corners_to_mod_sig, mod_sig_to_corners};

/// Right-difference bias. A top needs the right difference below `-EPS` and a
/// bottom needs it above `-EPS`, so a level right side after a fall is a
/// bottom while a level right side after a rise is not a top.
const EPS: f64 = 1e-16;

/// Top and bottom corner masks aligned to one mod signal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CornerMask {
    /// `true` where the signal has a local maximum.
    pub top: Vec<bool>,
    /// `true` where the signal has a local minimum.
    pub bottom: Vec<bool>,
}

impl CornerMask {
    /// Builds a mask of length `len` from corner index lists.
    ///
    /// Indices outside `1..len - 1` are ignored.
    pub fn from_indices(len: usize, top: &[usize], bottom: &[usize]) -> Self {
        let mut mask = Self {
            top: vec![false; len],
            bottom: vec![false; len],
        };
        let interior = 1..len.saturating_sub(1);
        for &i in top.iter().filter(|i| interior.contains(i)) {
            mask.top[i] = true;
        }
        for &i in bottom.iter().filter(|i| interior.contains(i)) {
            mask.bottom[i] = true;
        }
        mask
    }

    /// Length of the signal the mask describes.
    pub fn len(&self) -> usize {
        self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Indices of top corners in ascending order.
    pub fn top_indices(&self) -> Vec<usize> {
        set_indices(&self.top)
    }

    /// Indices of bottom corners in ascending order.
    pub fn bottom_indices(&self) -> Vec<usize> {
        set_indices(&self.bottom)
    }

    /// Indices of all corners, tops and bottoms merged, in ascending order.
    pub fn combined_indices(&self) -> Vec<usize> {
        self.top
            .iter()
            .zip(&self.bottom)
            .enumerate()
            .filter(|(_, (&t, &b))| t || b)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn n_top(&self) -> usize {
        self.top.iter().filter(|&&t| t).count()
    }

    pub fn n_bottom(&self) -> usize {
        self.bottom.iter().filter(|&&b| b).count()
    }

    /// Total number of corners of either kind.
    pub fn n_corners(&self) -> usize {
        self.n_top() + self.n_bottom()
    }
}

fn set_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &set)| set.then_some(i))
        .collect()
}

/// Finds the top and bottom corners of one mod signal.
///
/// Sample `i` is a top if `x[i] - x[i-1] > 0` and `x[i+1] - x[i] < -EPS`,
/// and a bottom if `x[i] - x[i-1] < 0` and `x[i+1] - x[i] > -EPS`. A sample
/// with a zero left difference is never a corner, and a rise into a plateau
/// has no top. Signals shorter than three samples have no corners.
pub fn find_corners(mod_sig: &[f64]) -> CornerMask {
    let n = mod_sig.len();
    let mut mask = CornerMask {
        top: vec![false; n],
        bottom: vec![false; n],
    };
    for (w, i) in mod_sig.windows(3).zip(1..) {
        let left = w[1] - w[0];
        let right = w[2] - w[1];
        if left > 0.0 && right < -EPS {
            mask.top[i] = true;
        } else if left < 0.0 && right > -EPS {
            mask.bottom[i] = true;
        }
    }
    mask
}

/// Runs [`find_corners`] on every signal of a batch in parallel.
pub fn find_corners_batch(mod_sigs: &[Vec<f64>]) -> Vec<CornerMask> {
    mod_sigs.par_iter().map(|sig| find_corners(sig)).collect()
}
