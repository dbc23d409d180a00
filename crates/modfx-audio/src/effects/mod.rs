//! Mod-signal-driven audio effects.
//!
//! [`FlangerChorus`] is the stateful modulated delay engine;
//! [`apply_tremolo`] is a stateless amplitude-modulation baseline. Both take
//! their scalar controls as [`EffectParam`]s, shared across the batch or
//! given per batch item.

pub mod delay_line;
pub mod flanger;
pub mod params;
pub mod tremolo;

pub use delay_line::DelayLine;
pub use flanger::FlangerChorus;
pub use params::{EffectParam, FlangerParams, ItemParams, ParamDomain};
pub use tremolo::apply_tremolo;
