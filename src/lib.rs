//! Fresnel equations for planar interfaces between isotropic media.
//!
//! This crate computes the reflection and transmission of light at a flat
//! boundary between two non-magnetic, isotropic, homogeneous media. Given
//! the refractive indices on either side of the interface and the incidence
//! angle, it evaluates the closed-form Fresnel formulas for both linear
//! polarization states.
//!
//! The library provides:
//! - Reflection and transmission amplitude coefficients for s and p polarizations
//! - Reflectance and transmittance energy fractions
//! - Transmitted-angle derivation from Snell's law
//! - Typed errors for unphysical geometries and total internal reflection
//!
//! # Conventions
//!
//! All angles are in radians, measured from the surface normal. Refractive
//! indices are real; absorbing media are out of scope. Each function is a
//! pure computation with no shared state, so results never depend on call
//! history and every function is safe to call from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_4;
//!
//! let r = fresnel::refl_s(1.0, 2.0, FRAC_PI_4, None).unwrap();
//! let big_r = fresnel::reflectance_s(1.0, 2.0, FRAC_PI_4, None).unwrap();
//! assert!((big_r - r * r).abs() < 1e-15);
//! ```

pub mod config;
pub mod errors;
pub mod fresnel;
pub mod powers;
pub mod snell;

pub use errors::FresnelError;
pub use fresnel::{refl_p, refl_s, refr_p, refr_s};
pub use powers::{
    reflectance_p, reflectance_s, reflectance_unpolarized, transmittance_p, transmittance_s,
};
pub use snell::{critical_angle, transmitted_angle};
