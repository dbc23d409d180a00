//! Acceptance checks for synthetic mod signals.
//!
//! A signal is kept as a training target only if its corner counts are
//! within [`CornerPolicy`] bounds and no two consecutive corners of the same
//! kind are closer than the policy's minimum spacing.

use std::fmt;

use modfx_spec::CornerPolicy;
use rayon::prelude::*;

use crate::corners::{find_corners, CornerMask};
use crate::error::AudioResult;

/// Which kind of corner a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerKind {
    Top,
    Bottom,
}

impl fmt::Display for CornerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerKind::Top => write!(f, "top"),
            CornerKind::Bottom => write!(f, "bottom"),
        }
    }
}

/// Why a mod signal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooFewCorners {
        kind: CornerKind,
        count: usize,
        min: usize,
    },
    TooManyCorners {
        kind: CornerKind,
        count: usize,
        max: usize,
    },
    /// Two consecutive same-kind corners are `distance` frames apart.
    CornersTooClose {
        kind: CornerKind,
        distance: usize,
        min: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooFewCorners { kind, count, min } => {
                write!(f, "{} {} corners, need at least {}", count, kind, min)
            }
            Rejection::TooManyCorners { kind, count, max } => {
                write!(f, "{} {} corners, allowed at most {}", count, kind, max)
            }
            Rejection::CornersTooClose {
                kind,
                distance,
                min,
            } => write!(
                f,
                "{} corners {} frames apart, need at least {}",
                kind, distance, min
            ),
        }
    }
}

fn check_count(kind: CornerKind, count: usize, min: usize, max: usize) -> Result<(), Rejection> {
    if count < min {
        return Err(Rejection::TooFewCorners { kind, count, min });
    }
    if count > max {
        return Err(Rejection::TooManyCorners { kind, count, max });
    }
    Ok(())
}

fn check_spacing(kind: CornerKind, indices: &[usize], min: usize) -> Result<(), Rejection> {
    match indices.windows(2).map(|w| w[1] - w[0]).min() {
        Some(distance) if distance < min => Err(Rejection::CornersTooClose {
            kind,
            distance,
            min,
        }),
        _ => Ok(()),
    }
}

/// Checks a corner mask against `policy`.
///
/// Counts are checked before spacing, tops before bottoms. The minimum
/// spacing is `min_fraction_between_corners * len`, truncated to whole
/// frames. `policy` is assumed valid; see [`CornerPolicy::validate`].
pub fn validate_mod_sig(mask: &CornerMask, policy: &CornerPolicy) -> Result<(), Rejection> {
    check_count(
        CornerKind::Top,
        mask.n_top(),
        policy.min_top_corners,
        policy.max_top_corners,
    )?;
    check_count(
        CornerKind::Bottom,
        mask.n_bottom(),
        policy.min_bottom_corners,
        policy.max_bottom_corners,
    )?;

    let min_frames = (policy.min_fraction_between_corners * mask.len() as f64) as usize;
    check_spacing(CornerKind::Top, &mask.top_indices(), min_frames)?;
    check_spacing(CornerKind::Bottom, &mask.bottom_indices(), min_frames)
}

/// Returns true if `mod_sig` passes [`validate_mod_sig`].
pub fn check_mod_sig(mod_sig: &[f64], policy: &CornerPolicy) -> bool {
    validate_mod_sig(&find_corners(mod_sig), policy).is_ok()
}

/// Indices of the signals in a batch that pass [`check_mod_sig`], ascending.
///
/// Fails if `policy` itself does not validate.
pub fn find_valid_mod_sig_indices(
    mod_sigs: &[Vec<f64>],
    policy: &CornerPolicy,
) -> AudioResult<Vec<usize>> {
    policy.validate()?;
    let valid: Vec<usize> = mod_sigs
        .par_iter()
        .enumerate()
        .filter(|(_, sig)| check_mod_sig(sig, policy))
        .map(|(idx, _)| idx)
        .collect();
    log::debug!("{} of {} mod signals accepted", valid.len(), mod_sigs.len());
    Ok(valid)
}
