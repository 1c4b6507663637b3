//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use toothed_lpa::float_types::Real;
use toothed_lpa::{DesignParameters, Seed};

/// Absolute comparison.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison against `b`.
pub fn rel_eq(a: Real, b: Real, eps: Real) -> bool {
    if b == 0.0 {
        return a.abs() < eps;
    }
    ((a - b) / b).abs() < eps
}

/// Γ = 1.2, α = 30°, ε = 2, four pairs seeded at r₁ = 0.1 m.
pub fn reference_params() -> DesignParameters {
    DesignParameters::new(1.2, 30.0, 2.0, 4, Seed::Radius(0.1))
}

/// Same antenna with `count` tooth pairs.
pub fn params_with_pairs(count: usize) -> DesignParameters {
    DesignParameters::new(1.2, 30.0, 2.0, count, Seed::Radius(0.1))
}
