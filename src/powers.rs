//! Energy fractions at the interface.
//!
//! This module converts the Fresnel amplitude coefficients into the
//! fractions of incident power that are reflected and transmitted. Energy
//! conservation is a fundamental check on these quantities: for matched
//! polarization the reflectance and transmittance sum to 1, up to
//! floating-point rounding.
//!
//! The energy accounting provides:
//! - Reflectance for s and p polarizations
//! - Transmittance for s and p polarizations, with the energy-flux correction
//! - Unpolarized reflectance as the mean over both polarizations
//!
//! # Numerical Accuracy
//!
//! Transmittance is computed directly from the transmission coefficient and
//! the flux ratio `(n2 cos(theta_t)) / (n1 cos(theta_i))`, never as `1 - R`.
//! The subtraction form cancels catastrophically as `R` approaches 1 and
//! destroys the precision of the small transmitted remainder; the flux form
//! keeps it accurate, at the cost that `R + T = 1` holds only to rounding.

use anyhow::Result;

use crate::fresnel;

/// Fraction of incident power reflected for s-polarized light.
///
/// The squared modulus of [`fresnel::refl_s`]. Lies in `[0, 1]` for
/// physical inputs.
pub fn reflectance_s(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let r = fresnel::refl_s(n1, n2, theta_i, theta_t)?;
    Ok(r * r)
}

/// Fraction of incident power reflected for p-polarized light.
///
/// The squared modulus of [`fresnel::refl_p`]. Lies in `[0, 1]` for
/// physical inputs.
pub fn reflectance_p(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let r = fresnel::refl_p(n1, n2, theta_i, theta_t)?;
    Ok(r * r)
}

/// Fraction of incident power transmitted for s-polarized light.
///
/// **Context**: The transmission coefficient alone is not an energy
/// fraction. The transmitted beam propagates in a different medium at a
/// different angle, so the power flux through the interface picks up the
/// ratio of the two impedance-weighted beam cross sections.
///
/// **How it Works**: Derives the transmitted angle at most once, evaluates
/// [`fresnel::refr_s`] with it, and scales the squared coefficient by
/// `(n2 cos(theta_t)) / (n1 cos(theta_i))`.
pub fn transmittance_s(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = fresnel::resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let t = fresnel::refr_s(n1, n2, theta_i, Some(theta_t))?;
    Ok(flux_ratio(n1, n2, theta_i, theta_t) * t * t)
}

/// Fraction of incident power transmitted for p-polarized light.
///
/// Same flux correction as [`transmittance_s`], applied to
/// [`fresnel::refr_p`].
pub fn transmittance_p(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = fresnel::resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let t = fresnel::refr_p(n1, n2, theta_i, Some(theta_t))?;
    Ok(flux_ratio(n1, n2, theta_i, theta_t) * t * t)
}

/// Reflectance of unpolarized light, the mean of the two polarizations.
pub fn reflectance_unpolarized(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = fresnel::resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let r_s = reflectance_s(n1, n2, theta_i, Some(theta_t))?;
    let r_p = reflectance_p(n1, n2, theta_i, Some(theta_t))?;
    Ok((r_s + r_p) / 2.0)
}

/// Ratio of the transmitted to the incident power flux normal to the
/// interface.
fn flux_ratio(n1: f64, n2: f64, theta_i: f64, theta_t: f64) -> f64 {
    (n2 * theta_t.cos()) / (n1 * theta_i.cos())
}
