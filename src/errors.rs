//! Validation and calculation errors

use crate::float_types::Real;
use std::fmt::Display;

/// The design input a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ScalingFactor,
    ToothAngle,
    EffectivePermittivity,
    ToothPairCount,
    StartRadius,
    StartFrequency,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::ScalingFactor => "scaling factor",
            Field::ToothAngle => "tooth angle",
            Field::EffectivePermittivity => "effective permittivity",
            Field::ToothPairCount => "tooth pair count",
            Field::StartRadius => "start radius",
            Field::StartFrequency => "start frequency",
        };
        f.write_str(name)
    }
}

/// All the possible input violations we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The value is NaN or infinite
    #[error("(NonFinite) The {field} ({value}) is NaN or infinite")]
    NonFinite { field: Field, value: Real },
    /// Γ must be strictly positive
    #[error("(ScalingFactor) Scaling factor must be greater than zero, got {0}")]
    NonPositiveScalingFactor(Real),
    /// α must lie strictly between 0 and 90 degrees
    #[error("(ToothAngle) Tooth angle must be between 0 and 90 degrees (exclusive), got {0}")]
    ToothAngleOutOfRange(Real),
    /// ε_eff must be at least 1
    #[error("(EffectivePermittivity) Effective permittivity must be >= 1, got {0}")]
    PermittivityBelowUnity(Real),
    /// Pair count must lie in 1..=16
    #[error("(ToothPairCount) Number of tooth pairs must be between {min} and {max}, got {count}")]
    ToothPairCountOutOfRange { count: usize, min: usize, max: usize },
    /// r₁ must be strictly positive
    #[error("(StartRadius) Start radius must be greater than zero, got {0}")]
    NonPositiveStartRadius(Real),
    /// f₁ must be strictly positive
    #[error("(StartFrequency) Start frequency must be greater than zero, got {0}")]
    NonPositiveStartFrequency(Real),
}

impl ValidationError {
    /// The input field that caused this error.
    pub const fn field(&self) -> Field {
        match self {
            ValidationError::NonFinite { field, .. } => *field,
            ValidationError::NonPositiveScalingFactor(_) => Field::ScalingFactor,
            ValidationError::ToothAngleOutOfRange(_) => Field::ToothAngle,
            ValidationError::PermittivityBelowUnity(_) => Field::EffectivePermittivity,
            ValidationError::ToothPairCountOutOfRange { .. } => Field::ToothPairCount,
            ValidationError::NonPositiveStartRadius(_) => Field::StartRadius,
            ValidationError::NonPositiveStartFrequency(_) => Field::StartFrequency,
        }
    }
}

/// Failures of the numeric pipeline on inputs that passed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    /// `(1+√Γ)·α + (√Γ−1)` collapsed towards zero
    #[error("(DegenerateDenominator) Radius/frequency denominator collapsed to {0}")]
    DegenerateDenominator(Real),
    /// A tooth radius solved to NaN, infinity or a non-positive value
    #[error("(NonFiniteRadius) Radius of tooth pair {n} is not a finite positive value: {value}")]
    NonFiniteRadius { n: usize, value: Real },
    /// A tooth frequency solved to NaN, infinity or a non-positive value
    #[error("(NonFiniteFrequency) Frequency of tooth pair {n} is not a finite positive value: {value}")]
    NonFiniteFrequency { n: usize, value: Real },
    /// The feed gap rule produced NaN or infinity
    #[error("(NonFiniteFeedGap) Feed gap is not finite: {0}")]
    NonFiniteFeedGap(Real),
}

/// Anything that can abort a calculation request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AntennaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

impl AntennaError {
    /// The offending field, for validation failures only.
    pub const fn field(&self) -> Option<Field> {
        match self {
            AntennaError::Validation(error) => Some(error.field()),
            AntennaError::Calculation(_) => None,
        }
    }
}
