//! Fresnel amplitude coefficients at a planar interface.
//!
//! This module implements the Fresnel equations that govern the reflection
//! and transmission of an electromagnetic wave at the boundary between two
//! isotropic, non-magnetic media. The amplitude coefficients computed here
//! carry the phase information of the boundary conditions through their
//! sign; their squared moduli give the energy fractions in
//! [`crate::powers`].
//!
//! The Fresnel calculations provide:
//! - Reflection coefficients for s and p polarizations
//! - Transmission coefficients for s and p polarizations
//! - Validation of the incidence and transmitted angles
//! - Optional derivation of the transmitted angle from Snell's law
//!
//! # Boundary Angles
//!
//! Grazing and degenerate configurations can drive a denominator to zero.
//! The resulting IEEE-754 `inf`/`NaN` values are passed through unguarded,
//! since the formulas have well-defined limits there and an error would
//! force every caller to special-case boundary angles.

use anyhow::Result;

use crate::config::MAX_POLAR_ANGLE;
use crate::errors::FresnelError;
use crate::snell;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn normal_incidence_coefficients() {
        let (n1, n2) = (1.0, 1.5);
        assert_eq!(refl_s(n1, n2, 0.0, None).unwrap(), (n1 - n2) / (n1 + n2));
        assert_eq!(refl_p(n1, n2, 0.0, None).unwrap(), (n2 - n1) / (n2 + n1));
        assert_eq!(refr_s(n1, n2, 0.0, None).unwrap(), 2.0 * n1 / (n1 + n2));
        assert_eq!(refr_p(n1, n2, 0.0, None).unwrap(), 2.0 * n1 / (n1 + n2));
    }

    #[test]
    fn grazing_incidence_full_reflection() {
        let r = refl_s(1.0, 1.5, MAX_POLAR_ANGLE, None).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_angle_skips_derivation() {
        // Derivation would fail here (total internal reflection), but the
        // caller-supplied transmitted angle takes precedence.
        let r = refl_s(1.5, 1.0, 1.2, Some(0.5));
        assert!(r.is_ok());
    }

    #[test]
    fn rejects_incidence_angle_beyond_limit() {
        let err = refl_s(1.0, 1.5, MAX_POLAR_ANGLE + 0.01, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FresnelError>(),
            Some(FresnelError::InvalidAngle(_))
        ));
    }

    #[test]
    fn rejects_transmitted_angle_beyond_limit() {
        let err = refr_p(1.0, 1.5, 0.3, Some(MAX_POLAR_ANGLE + 0.01)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FresnelError>(),
            Some(FresnelError::InvalidAngle(_))
        ));
    }
}

/// Rejects angle pairs that describe light arriving from behind the
/// interface. Negative angles are left to the caller; the formulas are
/// well-behaved under sign flips.
pub(crate) fn check_angles(theta_i: f64, theta_t: f64) -> Result<()> {
    if theta_i > MAX_POLAR_ANGLE {
        let message = if theta_t > MAX_POLAR_ANGLE {
            format!(
                "theta_i = {} and theta_t = {} both exceed pi/2",
                theta_i, theta_t
            )
        } else {
            format!("theta_i = {} exceeds pi/2", theta_i)
        };
        return Err(FresnelError::InvalidAngle(message).into());
    }

    if theta_t > MAX_POLAR_ANGLE {
        return Err(
            FresnelError::InvalidAngle(format!("theta_t = {} exceeds pi/2", theta_t)).into(),
        );
    }

    Ok(())
}

/// Resolves the transmitted angle for one formula evaluation: derives it
/// from Snell's law when the caller passed `None`, then validates the pair.
/// Every public formula funnels through here, so the derived and explicit
/// paths cannot diverge.
pub(crate) fn resolve_theta_t(
    n1: f64,
    n2: f64,
    theta_i: f64,
    theta_t: Option<f64>,
) -> Result<f64> {
    let theta_t = match theta_t {
        Some(theta_t) => theta_t,
        None => snell::transmitted_angle(n1, n2, theta_i)?,
    };

    check_angles(theta_i, theta_t)?;

    Ok(theta_t)
}

/// Computes the s-polarization reflection coefficient.
///
/// **Context**: When electromagnetic waves encounter an interface between
/// media with different refractive indices, the reflected field amplitude
/// depends on polarization, incidence angle, and the two indices. For
/// s-polarization the electric field is perpendicular to the plane of
/// incidence.
///
/// **How it Works**: Evaluates the classic Fresnel formula
/// `(n1 cos(theta_i) - n2 cos(theta_t)) / (n1 cos(theta_i) + n2 cos(theta_t))`.
/// The sign of the result carries the phase of the reflected field. Passing
/// `None` for `theta_t` derives it via [`snell::transmitted_angle`].
pub fn refl_s(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    Ok((n1 * cti - n2 * ctt) / (n1 * cti + n2 * ctt))
}

/// Computes the p-polarization reflection coefficient.
///
/// **Context**: For p-polarization the electric field lies in the plane of
/// incidence, which swaps the roles of the two indices relative to the
/// s-polarization formula. The coefficient vanishes at the Brewster
/// configuration.
///
/// **How it Works**: Evaluates
/// `(n2 cos(theta_i) - n1 cos(theta_t)) / (n2 cos(theta_i) + n1 cos(theta_t))`.
/// Note the sign convention differs from s-polarization at normal
/// incidence. Passing `None` for `theta_t` derives it via
/// [`snell::transmitted_angle`].
pub fn refl_p(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    Ok((n2 * cti - n1 * ctt) / (n2 * cti + n1 * ctt))
}

/// Computes the s-polarization transmission coefficient.
///
/// **Context**: Transmitted (refracted) fields at the interface require
/// different amplitude scaling than reflected fields. The transmission
/// coefficient relates the incident and transmitted field amplitudes; it is
/// an amplitude ratio, not an energy fraction, so values above 1 are
/// possible.
///
/// **How it Works**: Evaluates
/// `2 n1 cos(theta_i) / (n1 cos(theta_i) + n2 cos(theta_t))`. The energy
/// fraction with the impedance correction applied lives in
/// [`crate::powers::transmittance_s`].
pub fn refr_s(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    Ok((2.0 * n1 * cti) / (n1 * cti + n2 * ctt))
}

/// Computes the p-polarization transmission coefficient.
///
/// **Context**: As with reflection, the p-polarization geometry swaps the
/// index weighting in the denominator relative to s-polarization.
///
/// **How it Works**: Evaluates
/// `2 n1 cos(theta_i) / (n2 cos(theta_i) + n1 cos(theta_t))`. The energy
/// fraction with the impedance correction applied lives in
/// [`crate::powers::transmittance_p`].
pub fn refr_p(n1: f64, n2: f64, theta_i: f64, theta_t: Option<f64>) -> Result<f64> {
    let theta_t = resolve_theta_t(n1, n2, theta_i, theta_t)?;
    let cti = theta_i.cos();
    let ctt = theta_t.cos();
    Ok((2.0 * n1 * cti) / (n2 * cti + n1 * ctt))
}
