//! Time warping and per-segment reshaping of mod signals.
//!
//! Every transform here is anchored on corners from
//! [`find_corners`](crate::corners::find_corners):
//!
//! - [`make_quasi_periodic`] jitters the length of each cycle
//! - [`make_concave_convex_mod_sig`] bends each ramp of a triangle wave
//! - [`make_combined_mod_sig`] swaps the shape of each cycle
//! - [`stretch_corners`] rescales segments so corners land on 0.0 and 1.0

mod combined;
mod concave_convex;
mod quasi_periodic;
mod stretch;

#[cfg(test)]
mod tests;

pub use combined::make_combined_mod_sig;
pub use concave_convex::make_concave_convex_mod_sig;
pub use quasi_periodic::make_quasi_periodic;
pub use stretch::{stretch_corners, stretch_corners_batch, StretchOutcome};
