//! modfx Audio Backend
//!
//! This crate generates LFO mod signals, analyzes them by their corners, and
//! drives a modulated delay-line effect with them to produce dry/wet audio
//! pairs with ground-truth modulation curves.
//!
//! # Overview
//!
//! - **Synthesis** - Canonical mod-signal shapes and randomized batches
//! - **Corners** - Local extremum detection and a lossy corner codec
//! - **Warping** - Quasi-periodic jitter, concave/convex ramps, combined
//!   shapes, corner stretching
//! - **Validity** - Corner-count and spacing acceptance checks
//! - **Effects** - Flanger/chorus delay engine and tremolo
//!
//! # Determinism
//!
//! Every stochastic function takes an explicit `&mut Pcg32`. Given the same
//! seed the output is identical across runs and thread counts; batched work
//! draws its random values up front, in item order, before fanning out.
//!
//! # Example
//!
//! ```
//! use modfx_audio::effects::{FlangerChorus, FlangerParams};
//! use modfx_audio::synthesis::make_mod_signal;
//! use modfx_audio::AudioBatch;
//! use modfx_spec::Shape;
//!
//! let n = 1600;
//! let lfo = make_mod_signal(n, 16000.0, 2.0, 0.0, Shape::Tri, 1.0).unwrap();
//! let mod_sig = AudioBatch::from_rows(&[lfo]).unwrap();
//! let dry = AudioBatch::zeros(1, 1, n);
//!
//! let mut engine = FlangerChorus::new(1, 1, n, 16000.0, 0.0, 5.0).unwrap();
//! let wet = engine.apply(&dry, &mod_sig, &FlangerParams::default()).unwrap();
//! assert_eq!(wet.shape(), (1, 1, n));
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Dense (batch, channel, sample) buffers
//! - [`corners`] - Corner detection and the corner codec
//! - [`effects`] - Flanger/chorus engine, tremolo, effect parameters
//! - [`interp`] - Resampling and smoothing
//! - [`render`] - Parameter sampling and batch rendering
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`synthesis`] - Mod-signal synthesis
//! - [`validity`] - Acceptance checks for mod signals
//! - [`warp`] - Corner-anchored time warps and reshaping

pub mod buffer;
pub mod corners;
pub mod effects;
pub mod error;
pub mod interp;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod validity;
pub mod warp;

// Re-export main types at crate root
pub use buffer::AudioBatch;
pub use corners::{find_corners, CornerMask};
pub use error::{AudioError, AudioResult};
pub use render::{render_flanger_batch, sample_flanger_params, RenderedBatch};
pub use synthesis::{make_mod_signal, make_rand_mod_signals, ModSigBaselines};
pub use validity::{check_mod_sig, find_valid_mod_sig_indices, validate_mod_sig, Rejection};
pub use warp::StretchOutcome;
