use modfx_spec::{
    ConcaveConvexConfig, ParamRange, QuasiPeriodicConfig, Shape, StretchConfig,
};
use pretty_assertions::assert_eq;

use super::*;
use crate::corners::{find_corners, CornerMask};
use crate::error::AudioError;
use crate::rng::create_rng;
use crate::synthesis::make_mod_signal;

fn cos(n: usize, sr: f64, freq: f64, phase: f64) -> Vec<f64> {
    make_mod_signal(n, sr, freq, phase, Shape::Cos, 1.0).unwrap()
}

/// Corner kinds in index order, `true` for tops.
fn corner_sequence(mask: &CornerMask) -> Vec<bool> {
    mask.combined_indices()
        .into_iter()
        .map(|i| mask.top[i])
        .collect()
}

/// Four cycles of an asymmetric triangle: 300 samples up, 700 down.
fn skewed_tri() -> Vec<f64> {
    (0..4000)
        .map(|i| {
            let p = (i % 1000) as f64;
            if p < 300.0 {
                p / 300.0
            } else {
                1.0 - (p - 300.0) / 700.0
            }
        })
        .collect()
}

fn mild_jitter() -> QuasiPeriodicConfig {
    QuasiPeriodicConfig {
        l_min: 0.05,
        l_max: 0.1,
        r_min: 0.05,
        r_max: 0.1,
        lr_split: 0.5,
    }
}

// ---------------------------------------------------------------------------
// Quasi-periodic
// ---------------------------------------------------------------------------

#[test]
fn test_quasi_periodic_preserves_length() {
    let sig = cos(4000, 4000.0, 4.0, 0.0);
    for seed in 0..20 {
        let mut rng = create_rng(seed);
        let out = make_quasi_periodic(&sig, &QuasiPeriodicConfig::default(), &mut rng).unwrap();
        assert_eq!(out.len(), sig.len(), "seed {}", seed);
    }
}

#[test]
fn test_quasi_periodic_preserves_corner_topology() {
    let sig = skewed_tri();
    let before = find_corners(&sig);
    assert_eq!((before.n_top(), before.n_bottom()), (4, 3));
    for seed in 0..20 {
        let mut rng = create_rng(seed);
        let out = make_quasi_periodic(&sig, &mild_jitter(), &mut rng).unwrap();
        let after = find_corners(&out);
        assert_eq!(after.n_top(), before.n_top(), "seed {}", seed);
        assert_eq!(after.n_bottom(), before.n_bottom(), "seed {}", seed);
        assert_eq!(corner_sequence(&after), corner_sequence(&before));
    }
}

#[test]
fn test_quasi_periodic_moves_corners() {
    let sig = skewed_tri();
    let mut rng = create_rng(9);
    let out = make_quasi_periodic(&sig, &mild_jitter(), &mut rng).unwrap();
    assert_ne!(
        find_corners(&out).top_indices(),
        find_corners(&sig).top_indices()
    );
}

#[test]
fn test_quasi_periodic_passthrough_without_anchors() {
    let ramp: Vec<f64> = (0..100).map(|i| i as f64 / 99.0).collect();
    let mut rng = create_rng(0);
    let out = make_quasi_periodic(&ramp, &QuasiPeriodicConfig::default(), &mut rng).unwrap();
    assert_eq!(out, ramp);
}

#[test]
fn test_quasi_periodic_is_deterministic() {
    let sig = cos(2000, 1000.0, 3.0, 0.5);
    let config = QuasiPeriodicConfig::default();
    let a = make_quasi_periodic(&sig, &config, &mut create_rng(4)).unwrap();
    let b = make_quasi_periodic(&sig, &config, &mut create_rng(4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_quasi_periodic_rejects_bad_config() {
    let config = QuasiPeriodicConfig {
        lr_split: 1.5,
        ..Default::default()
    };
    let err = make_quasi_periodic(&[0.0; 8], &config, &mut create_rng(0)).unwrap_err();
    assert!(matches!(err, AudioError::Config(_)));
}

// ---------------------------------------------------------------------------
// Concave / convex
// ---------------------------------------------------------------------------

#[test]
fn test_concave_only() {
    let config = ConcaveConvexConfig {
        concave: ParamRange::fixed(0.5),
        convex: ParamRange::fixed(2.0),
        concave_prob: 1.0,
    };
    let tri = make_mod_signal(500, 500.0, 3.0, 0.0, Shape::Tri, 1.0).unwrap();
    let out = make_concave_convex_mod_sig(500, 500.0, 3.0, 0.0, &config, &mut create_rng(1))
        .unwrap();
    for (t, o) in tri.iter().zip(&out) {
        assert!((t.sqrt() - o).abs() < 1e-12);
    }
}

#[test]
fn test_convex_only() {
    let config = ConcaveConvexConfig {
        concave: ParamRange::fixed(0.5),
        convex: ParamRange::fixed(2.0),
        concave_prob: 0.0,
    };
    let tri = make_mod_signal(500, 500.0, 3.0, 0.0, Shape::Tri, 1.0).unwrap();
    let out = make_concave_convex_mod_sig(500, 500.0, 3.0, 0.0, &config, &mut create_rng(1))
        .unwrap();
    for (t, o) in tri.iter().zip(&out) {
        assert!((t * t - o).abs() < 1e-12);
    }
}

#[test]
fn test_concave_convex_range() {
    let config = ConcaveConvexConfig::default();
    let out = make_concave_convex_mod_sig(1000, 1000.0, 5.0, 1.0, &config, &mut create_rng(2))
        .unwrap();
    assert_eq!(out.len(), 1000);
    assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_concave_convex_propagates_synth_errors() {
    let config = ConcaveConvexConfig::default();
    let err = make_concave_convex_mod_sig(100, 100.0, 60.0, 0.0, &config, &mut create_rng(0))
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidFrequency { .. }));
}

// ---------------------------------------------------------------------------
// Combined shapes
// ---------------------------------------------------------------------------

#[test]
fn test_combined_replaces_cycles() {
    let base = cos(1000, 1000.0, 4.0, 0.0);
    let bottoms = find_corners(&base).bottom_indices();
    assert!(bottoms.len() >= 2);

    let out = make_combined_mod_sig(1000, 1000.0, 4.0, 0.0, &[Shape::Cos], &mut create_rng(0))
        .unwrap();
    let (start, end) = (bottoms[0], bottoms[1]);
    let len = end - start + 1;
    let cycle = make_mod_signal(len, len as f64, 1.0, 0.0, Shape::Cos, 1.0).unwrap();
    // The closing bottom is shared with the next replaced cycle.
    assert_eq!(&out[start..end], &cycle[..len - 1]);
    // Before the first bottom the base signal is untouched.
    assert_eq!(&out[..start], &base[..start]);
}

#[test]
fn test_combined_mixed_shapes_in_range() {
    let shapes = Shape::RANDOM_DEFAULTS;
    for seed in 0..10 {
        let out =
            make_combined_mod_sig(2000, 1000.0, 3.0, 0.7, &shapes, &mut create_rng(seed)).unwrap();
        assert_eq!(out.len(), 2000);
        assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn test_combined_requires_shapes() {
    let err = make_combined_mod_sig(100, 100.0, 2.0, 0.0, &[], &mut create_rng(0)).unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "shapes"));
}

// ---------------------------------------------------------------------------
// Corner stretch
// ---------------------------------------------------------------------------

fn no_smoothing(max_n_corners: usize) -> StretchConfig {
    StretchConfig {
        max_n_corners,
        smooth_n_frames: 1,
    }
}

#[test]
fn test_stretch_lands_corners_on_canonical_values() {
    let sig: Vec<f64> = cos(600, 300.0, 2.0, 1.0)
        .into_iter()
        .map(|v| 0.5 * v + 0.2)
        .collect();
    let mask = find_corners(&sig);
    assert!(mask.n_top() > 0 && mask.n_bottom() > 0);

    let outcome = stretch_corners(&sig, &no_smoothing(10)).unwrap();
    assert!(outcome.is_stretched());
    let out = outcome.signal();
    for i in mask.top_indices() {
        assert_eq!(out[i], 1.0, "top {}", i);
    }
    for i in mask.bottom_indices() {
        assert_eq!(out[i], 0.0, "bottom {}", i);
    }
    assert!(out.iter().all(|&v| (-1e-9..=1.0 + 1e-9).contains(&v)));
    assert_eq!(out[599], sig[599]);
}

#[test]
fn test_stretch_smoothing_shortens_output() {
    let sig = cos(600, 300.0, 2.0, 1.0);
    let outcome = stretch_corners(&sig, &StretchConfig::default()).unwrap();
    assert_eq!(outcome.signal().len(), 600 - 32 + 1);
}

#[test]
fn test_stretch_skips_busy_signals() {
    let sig = cos(900, 300.0, 3.0, 0.0);
    let outcome = stretch_corners(&sig, &no_smoothing(10)).unwrap();
    assert_eq!(
        outcome,
        StretchOutcome::Skipped {
            smoothed: sig.clone(),
            n_corners: 17,
        }
    );
    assert_eq!(outcome.into_signal(), sig);
}

#[test]
fn test_stretch_window_longer_than_signal() {
    let err = stretch_corners(&[0.0; 10], &StretchConfig::default()).unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
}

#[test]
fn test_stretch_level_tail_is_shifted_not_scaled() {
    // A fall into a plateau: the bottom and the final sample sit at the same
    // height, so the tail segment has no range to scale.
    let sig = vec![0.5, 0.2, 0.2, 0.2];
    let outcome = stretch_corners(&sig, &no_smoothing(10)).unwrap();
    assert_eq!(outcome.signal(), &[0.5, 0.0, 0.2, 0.2]);
}

#[test]
fn test_stretch_rise_into_plateau_is_unchanged() {
    let sig = vec![0.0, 0.3, 0.3, 0.3];
    let outcome = stretch_corners(&sig, &no_smoothing(10)).unwrap();
    assert_eq!(outcome.signal(), sig.as_slice());
}

#[test]
fn test_stretch_batch() {
    let sigs = vec![cos(600, 300.0, 2.0, 1.0), cos(900, 300.0, 3.0, 0.0)];
    let outcomes = stretch_corners_batch(&sigs, &no_smoothing(10)).unwrap();
    assert!(outcomes[0].is_stretched());
    assert!(!outcomes[1].is_stretched());
}
