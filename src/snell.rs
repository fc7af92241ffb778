//! Snell's law for real refractive indices.
//!
//! This module derives the transmitted (refracted) angle at a planar
//! interface from the incidence angle and the refractive indices of the two
//! media. The derived angle is the default input to the Fresnel formulas
//! whenever a caller does not supply a measured transmitted angle.
//!
//! The implementation provides:
//! - Transmitted-angle derivation from the classical Snell's law
//! - A typed failure in the total internal reflection regime
//! - The critical angle above which derivation fails
//!
//! # Total Internal Reflection
//!
//! When light passes into an optically thinner medium at a steep enough
//! angle, `n1/n2 * sin(theta_i)` exceeds 1 and no real transmitted angle
//! exists. Derivation then fails with
//! [`FresnelError::TotalInternalReflection`] rather than returning `NaN`;
//! callers holding a measured transmitted angle can bypass derivation by
//! passing it explicitly to the interface formulas.

use anyhow::Result;

use crate::errors::FresnelError;


/// Computes the transmitted angle at the interface using Snell's law.
///
/// **Context**: The Fresnel formulas take both the incidence and the
/// transmitted angle as inputs, but in most configurations only the
/// incidence angle is known. Snell's law relates the two through the ratio
/// of the refractive indices, so the transmitted angle can be derived on
/// demand.
///
/// **How it Works**: Evaluates `asin(n1/n2 * sin(theta_i))` directly. The
/// direct-angle form is used instead of the `cos(theta_t)` identity so that
/// an explicitly supplied transmitted angle (e.g. from experimental
/// measurement) flows through the same downstream formulas verbatim. When
/// the arcsine argument exceeds 1 in magnitude the inputs are in the total
/// internal reflection regime and the function fails with a typed error.
pub fn transmitted_angle(n1: f64, n2: f64, theta_i: f64) -> Result<f64> {
    if n1 == n2 {
        return Ok(theta_i);
    }

    let sin_theta_t = n1 / n2 * theta_i.sin();

    if sin_theta_t.abs() > 1.0 {
        return Err(FresnelError::TotalInternalReflection(format!(
            "no real transmitted angle for n1 = {}, n2 = {}, theta_i = {}",
            n1, n2, theta_i
        ))
        .into());
    }

    Ok(sin_theta_t.asin())
}

/// Returns the incidence angle above which total internal reflection occurs.
///
/// Defined only when the light passes into an optically thinner medium
/// (`n1 > n2`); returns `None` otherwise. Incidence angles beyond the
/// returned value make [`transmitted_angle`] fail.
pub fn critical_angle(n1: f64, n2: f64) -> Option<f64> {
    if n1 > n2 {
        Some((n2 / n1).asin())
    } else {
        None
    }
}
