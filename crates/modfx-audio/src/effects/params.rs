//! Effect parameters that are either shared across a batch or per item.

use modfx_spec::validation::{validate_unit_interval, validate_unit_interval_exclusive};
use modfx_spec::ValidationError;

use crate::error::{AudioError, AudioResult};

/// Allowed values for an effect parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDomain {
    /// `[0, 1]`
    Unit,
    /// `[0, 1)`, for gains inside a feedback loop.
    UnitExclusive,
}

impl ParamDomain {
    fn check(self, name: &str, value: f64) -> Result<(), ValidationError> {
        match self {
            ParamDomain::Unit => validate_unit_interval(name, value),
            ParamDomain::UnitExclusive => validate_unit_interval_exclusive(name, value),
        }
    }
}

/// A scalar effect control.
///
/// Either form broadcasts over channels and samples; `PerItem` must have
/// exactly one value per batch item.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectParam {
    Single(f64),
    PerItem(Vec<f64>),
}

impl From<f64> for EffectParam {
    fn from(value: f64) -> Self {
        EffectParam::Single(value)
    }
}

impl From<Vec<f64>> for EffectParam {
    fn from(values: Vec<f64>) -> Self {
        EffectParam::PerItem(values)
    }
}

impl EffectParam {
    /// Checks every value against `domain` and expands to one value per
    /// batch item.
    pub fn resolve(
        &self,
        name: &str,
        domain: ParamDomain,
        batch_size: usize,
    ) -> AudioResult<Vec<f64>> {
        let values = match self {
            EffectParam::Single(value) => vec![*value; batch_size],
            EffectParam::PerItem(values) => {
                if values.len() != batch_size {
                    return Err(AudioError::shape_mismatch(
                        name,
                        format!("{} values", batch_size),
                        format!("{} values", values.len()),
                    ));
                }
                values.clone()
            }
        };
        for &value in &values {
            domain
                .check(name, value)
                .map_err(|err| AudioError::invalid_param(err.path, err.message))?;
        }
        Ok(values)
    }
}

/// Resolved parameters for one batch item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemParams {
    pub feedback: f64,
    pub min_delay_width: f64,
    pub width: f64,
    pub depth: f64,
    pub mix: f64,
}

/// Controls for [`FlangerChorus::apply`](super::FlangerChorus::apply).
///
/// Defaults give a full-depth, fully wet effect without feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct FlangerParams {
    /// Gain of the delayed sample written back into the delay line, in [0, 1).
    pub feedback: EffectParam,
    /// Fraction of the maximum static delay, in [0, 1].
    pub min_delay_width: EffectParam,
    /// Fraction of the maximum LFO delay swept by the mod signal, in [0, 1].
    pub width: EffectParam,
    /// Gain of the delayed sample added to the dry sample, in [0, 1].
    pub depth: EffectParam,
    /// Dry/wet blend, in [0, 1].
    pub mix: EffectParam,
}

impl Default for FlangerParams {
    fn default() -> Self {
        Self {
            feedback: EffectParam::Single(0.0),
            min_delay_width: EffectParam::Single(1.0),
            width: EffectParam::Single(1.0),
            depth: EffectParam::Single(1.0),
            mix: EffectParam::Single(1.0),
        }
    }
}

impl FlangerParams {
    /// Validates every parameter and returns one [`ItemParams`] per item.
    pub fn resolve(&self, batch_size: usize) -> AudioResult<Vec<ItemParams>> {
        let feedback = self
            .feedback
            .resolve("feedback", ParamDomain::UnitExclusive, batch_size)?;
        let min_delay_width =
            self.min_delay_width
                .resolve("min_delay_width", ParamDomain::Unit, batch_size)?;
        let width = self.width.resolve("width", ParamDomain::Unit, batch_size)?;
        let depth = self.depth.resolve("depth", ParamDomain::Unit, batch_size)?;
        let mix = self.mix.resolve("mix", ParamDomain::Unit, batch_size)?;

        Ok((0..batch_size)
            .map(|i| ItemParams {
                feedback: feedback[i],
                min_delay_width: min_delay_width[i],
                width: width[i],
                depth: depth[i],
                mix: mix[i],
            })
            .collect())
    }

    /// Per-item parameters as a struct of `PerItem` values.
    pub fn from_items(items: &[ItemParams]) -> Self {
        let column = |f: fn(&ItemParams) -> f64| EffectParam::PerItem(items.iter().map(f).collect());
        Self {
            feedback: column(|p| p.feedback),
            min_delay_width: column(|p| p.min_delay_width),
            width: column(|p| p.width),
            depth: column(|p| p.depth),
            mix: column(|p| p.mix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_broadcasts() {
        let values = EffectParam::from(0.3)
            .resolve("depth", ParamDomain::Unit, 4)
            .unwrap();
        assert_eq!(values, vec![0.3; 4]);
    }

    #[test]
    fn test_per_item_length_mismatch() {
        let err = EffectParam::from(vec![0.1, 0.2])
            .resolve("mix", ParamDomain::Unit, 3)
            .unwrap_err();
        assert!(matches!(err, AudioError::ShapeMismatch { ref name, .. } if name == "mix"));
    }

    #[test]
    fn test_feedback_excludes_one() {
        let err = EffectParam::from(1.0)
            .resolve("feedback", ParamDomain::UnitExclusive, 1)
            .unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "feedback"));
        assert!(EffectParam::from(1.0)
            .resolve("depth", ParamDomain::Unit, 1)
            .is_ok());
    }

    #[test]
    fn test_per_item_values_checked_elementwise() {
        let param = EffectParam::from(vec![0.2, 1.2, 0.4]);
        assert!(param.resolve("width", ParamDomain::Unit, 3).is_err());
        let nan = EffectParam::from(f64::NAN);
        assert!(nan.resolve("width", ParamDomain::Unit, 1).is_err());
    }

    #[test]
    fn test_default_flanger_params() {
        let items = FlangerParams::default().resolve(2).unwrap();
        assert_eq!(
            items[1],
            ItemParams {
                feedback: 0.0,
                min_delay_width: 1.0,
                width: 1.0,
                depth: 1.0,
                mix: 1.0,
            }
        );
    }

    #[test]
    fn test_from_items_roundtrip() {
        let items = vec![
            ItemParams {
                feedback: 0.5,
                min_delay_width: 0.1,
                width: 0.2,
                depth: 0.3,
                mix: 0.4,
            },
            ItemParams {
                feedback: 0.0,
                min_delay_width: 1.0,
                width: 0.9,
                depth: 0.8,
                mix: 0.7,
            },
        ];
        let params = FlangerParams::from_items(&items);
        assert_eq!(params.resolve(2).unwrap(), items);
    }
}
