//! Design inputs for one calculation.

use crate::errors::{Field, ValidationError};
use crate::float_types::Real;
use crate::units::FrequencyUnit;

/// Smallest and largest accepted number of tooth pairs.
pub const MIN_TOOTH_PAIRS: usize = 1;
pub const MAX_TOOTH_PAIRS: usize = 16;

/// The value the tooth-radius recurrence starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seed {
    /// Inner radius of the first tooth pair, in metres.
    Radius(Real),
    /// Resonant frequency of the first tooth pair.
    Frequency { value: Real, unit: FrequencyUnit },
}

/// Immutable design parameters of a planar toothed log-periodic antenna.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignParameters {
    /// Γ, ratio between successive tooth radii.
    pub scaling_factor: Real,
    /// α in degrees; β = 90 − α is the solid wedge.
    pub tooth_angle_deg: Real,
    /// ε_eff of the substrate.
    pub effective_permittivity: Real,
    pub tooth_pair_count: usize,
    pub seed: Seed,
    /// Only affects how frequencies are displayed.
    pub output_unit: FrequencyUnit,
}

impl DesignParameters {
    pub fn new(
        scaling_factor: Real,
        tooth_angle_deg: Real,
        effective_permittivity: Real,
        tooth_pair_count: usize,
        seed: Seed,
    ) -> Self {
        Self {
            scaling_factor,
            tooth_angle_deg,
            effective_permittivity,
            tooth_pair_count,
            seed,
            output_unit: FrequencyUnit::default(),
        }
    }

    pub const fn with_output_unit(mut self, unit: FrequencyUnit) -> Self {
        self.output_unit = unit;
        self
    }

    /// α in radians.
    #[inline]
    pub fn tooth_angle_rad(&self) -> Real {
        crate::math::deg_to_rad(self.tooth_angle_deg)
    }

    /// β = 90° − α, in degrees.
    #[inline]
    pub fn beta_angle_deg(&self) -> Real {
        90.0 - self.tooth_angle_deg
    }

    /// Returns the first violated constraint, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.validate_all().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Returns every violated constraint, at most one per field.
    pub fn validate_all(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = finite(Field::ScalingFactor, self.scaling_factor) {
            errors.push(e);
        } else if self.scaling_factor <= 0.0 {
            errors.push(ValidationError::NonPositiveScalingFactor(self.scaling_factor));
        }

        if let Err(e) = finite(Field::ToothAngle, self.tooth_angle_deg) {
            errors.push(e);
        } else if self.tooth_angle_deg <= 0.0 || self.tooth_angle_deg >= 90.0 {
            errors.push(ValidationError::ToothAngleOutOfRange(self.tooth_angle_deg));
        }

        if let Err(e) = finite(Field::EffectivePermittivity, self.effective_permittivity) {
            errors.push(e);
        } else if self.effective_permittivity < 1.0 {
            errors.push(ValidationError::PermittivityBelowUnity(
                self.effective_permittivity,
            ));
        }

        if !(MIN_TOOTH_PAIRS..=MAX_TOOTH_PAIRS).contains(&self.tooth_pair_count) {
            errors.push(ValidationError::ToothPairCountOutOfRange {
                count: self.tooth_pair_count,
                min: MIN_TOOTH_PAIRS,
                max: MAX_TOOTH_PAIRS,
            });
        }

        match self.seed {
            Seed::Radius(r) => {
                if let Err(e) = finite(Field::StartRadius, r) {
                    errors.push(e);
                } else if r <= 0.0 {
                    errors.push(ValidationError::NonPositiveStartRadius(r));
                }
            },
            Seed::Frequency { value, .. } => {
                if let Err(e) = finite(Field::StartFrequency, value) {
                    errors.push(e);
                } else if value <= 0.0 {
                    errors.push(ValidationError::NonPositiveStartFrequency(value));
                }
            },
        }

        errors
    }
}

fn finite(field: Field, value: Real) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DesignParameters {
        DesignParameters::new(1.2, 30.0, 2.0, 4, Seed::Radius(0.1))
    }

    #[test]
    fn valid_parameters_pass() {
        assert!(valid().validate().is_ok());
        assert!(valid().validate_all().is_empty());
        assert!((valid().beta_angle_deg() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn every_bad_field_is_reported() {
        let params = DesignParameters {
            scaling_factor: 0.0,
            tooth_angle_deg: 90.0,
            effective_permittivity: 0.5,
            tooth_pair_count: 17,
            seed: Seed::Frequency { value: -1.0, unit: FrequencyUnit::GHz },
            output_unit: FrequencyUnit::GHz,
        };
        let fields: Vec<Field> = params.validate_all().iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![
                Field::ScalingFactor,
                Field::ToothAngle,
                Field::EffectivePermittivity,
                Field::ToothPairCount,
                Field::StartFrequency,
            ]
        );
    }

    #[test]
    fn nan_is_tagged_to_its_field() {
        let mut params = valid();
        params.seed = Seed::Radius(Real::NAN);
        let err = params.validate().unwrap_err();
        assert_eq!(err.field(), Field::StartRadius);
        assert!(matches!(err, ValidationError::NonFinite { .. }));
    }

    #[test]
    fn pair_count_bounds_are_inclusive() {
        let mut params = valid();
        params.tooth_pair_count = 1;
        assert!(params.validate().is_ok());
        params.tooth_pair_count = 16;
        assert!(params.validate().is_ok());
        params.tooth_pair_count = 0;
        assert_eq!(params.validate().unwrap_err().field(), Field::ToothPairCount);
    }
}
