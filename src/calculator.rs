//! Tooth-pair radius/frequency recurrence and the feed-gap rule.
//!
//! For tooth pair `n` with inner radius `rₙ`:
//! ```text
//! fₙ   = C / (2 · (rₙ·(1+√Γ)·α + rₙ·(√Γ−1)) · √ε_eff)
//! rₙ₊₁ = rₙ · Γ
//! ```
//! Seeding from a frequency inverts the same relation algebraically.

use crate::errors::{AntennaError, CalculationError};
use crate::float_types::{Real, SPEED_OF_LIGHT, tolerance};
use crate::params::{DesignParameters, Seed};
use crate::units::{FrequencyUnit, meters_to_inches};
use log::debug;

/// Empirical feed-gap factor, relative to the free-space wavelength.
pub const FEED_GAP_FACTOR: Real = 0.02066;

/// One tooth pair of the computed sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothResult {
    /// 1-based pair index.
    pub n: usize,
    /// rₙ in metres.
    pub inner_radius_m: Real,
    /// fₙ in Hz.
    pub frequency_hz: Real,
}

impl ToothResult {
    pub fn inner_radius_inches(&self) -> Real {
        meters_to_inches(self.inner_radius_m)
    }

    /// rₙ·√Γ
    pub fn outer_radius_m(&self, scaling_factor: Real) -> Real {
        self.inner_radius_m * scaling_factor.sqrt()
    }

    /// Frequency expressed in `unit`, for display.
    pub fn frequency_in(&self, unit: FrequencyUnit) -> Real {
        unit.from_hz(self.frequency_hz)
    }
}

/// Output of [`calculate`]; always complete, never a partial sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub results: Vec<ToothResult>,
    pub feed_gap_m: Real,
}

impl Calculation {
    /// f_last / f_first.
    pub fn bandwidth_ratio(&self) -> Real {
        match (self.results.first(), self.results.last()) {
            (Some(first), Some(last)) => last.frequency_hz / first.frequency_hz,
            _ => 1.0,
        }
    }
}

/// Logarithmic period of the structure, ln Γ.
pub fn log_period(scaling_factor: Real) -> Real {
    scaling_factor.ln()
}

/// `(1+√Γ)·α + (√Γ−1)`, shared by both directions of the frequency relation.
fn shape_term(scaling_factor: Real, tooth_angle_rad: Real) -> Result<Real, CalculationError> {
    let sqrt_gamma = scaling_factor.sqrt();
    let term = (1.0 + sqrt_gamma) * tooth_angle_rad + (sqrt_gamma - 1.0);
    if !term.is_finite() || term.abs() < tolerance() {
        return Err(CalculationError::DegenerateDenominator(term));
    }
    Ok(term)
}

/// Resonant frequency in Hz of a tooth pair with inner radius `radius_m`.
pub fn frequency_for_radius(radius_m: Real, params: &DesignParameters) -> Result<Real, CalculationError> {
    let term = shape_term(params.scaling_factor, params.tooth_angle_rad())?;
    Ok(SPEED_OF_LIGHT / (2.0 * radius_m * term * params.effective_permittivity.sqrt()))
}

/// Inner radius in metres whose resonant frequency is `frequency_hz`.
pub fn radius_for_frequency(frequency_hz: Real, params: &DesignParameters) -> Result<Real, CalculationError> {
    let term = shape_term(params.scaling_factor, params.tooth_angle_rad())?;
    Ok(SPEED_OF_LIGHT / (2.0 * frequency_hz * term * params.effective_permittivity.sqrt()))
}

/// Feed gap in metres: `0.02066 · λ₀ / √ε_eff` with `λ₀ = C / f`.
pub fn feed_gap_meters(effective_permittivity: Real, frequency_hz: Real) -> Real {
    let lambda0 = SPEED_OF_LIGHT / frequency_hz;
    FEED_GAP_FACTOR * lambda0 / effective_permittivity.sqrt()
}

fn resolve_seed(params: &DesignParameters) -> Result<Real, CalculationError> {
    match params.seed {
        Seed::Radius(r) => Ok(r),
        Seed::Frequency { value, unit } => radius_for_frequency(unit.to_hz(value), params),
    }
}

#[inline]
fn finite_positive(value: Real) -> bool {
    value.is_finite() && value > 0.0
}

/// Computes every tooth pair and the feed gap for `params`.
///
/// Parameters are validated first; nothing is computed for invalid input.
/// Any non-finite intermediate aborts the whole calculation.
pub fn calculate(params: &DesignParameters) -> Result<Calculation, AntennaError> {
    params.validate()?;

    let r1 = resolve_seed(params)?;
    if !finite_positive(r1) {
        return Err(CalculationError::NonFiniteRadius { n: 1, value: r1 }.into());
    }
    debug!("seed radius r1 = {r1} m, {} tooth pairs", params.tooth_pair_count);

    let mut results = Vec::with_capacity(params.tooth_pair_count);
    let mut rn = r1;
    for n in 1..=params.tooth_pair_count {
        if !finite_positive(rn) {
            return Err(CalculationError::NonFiniteRadius { n, value: rn }.into());
        }
        let fn_hz = frequency_for_radius(rn, params)?;
        if !finite_positive(fn_hz) {
            return Err(CalculationError::NonFiniteFrequency { n, value: fn_hz }.into());
        }
        results.push(ToothResult {
            n,
            inner_radius_m: rn,
            frequency_hz: fn_hz,
        });
        rn *= params.scaling_factor;
    }

    let feed_gap_m = feed_gap_meters(params.effective_permittivity, results[0].frequency_hz);
    if !feed_gap_m.is_finite() {
        return Err(CalculationError::NonFiniteFeedGap(feed_gap_m).into());
    }
    debug!("feed gap = {feed_gap_m} m");

    Ok(Calculation { results, feed_gap_m })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_term_collapses_for_unit_gamma_and_zero_angle() {
        assert!(matches!(
            shape_term(1.0, 0.0),
            Err(CalculationError::DegenerateDenominator(_))
        ));
        assert!(shape_term(1.2, 0.5).is_ok());
    }

    #[test]
    fn frequency_and_radius_are_inverse() {
        let params = DesignParameters::new(1.3, 45.0, 4.4, 5, Seed::Radius(0.02));
        let f = frequency_for_radius(0.02, &params).unwrap();
        let r = radius_for_frequency(f, &params).unwrap();
        assert!(((r - 0.02) / 0.02).abs() < 1e-12);
    }

    #[test]
    fn bandwidth_ratio_follows_inverse_gamma() {
        let params = DesignParameters::new(1.25, 30.0, 1.0, 3, Seed::Radius(0.05));
        let calc = calculate(&params).unwrap();
        // f ∝ 1/r, so f3/f1 = 1/Γ²
        let expected = 1.0 / (1.25 * 1.25);
        assert!((calc.bandwidth_ratio() - expected).abs() < 1e-12);
        assert!((log_period(1.25) - 1.25_f64.ln()).abs() < 1e-15);
    }
}
