/// Largest polar angle, measured from the surface normal, that still
/// describes light arriving from in front of the interface.
pub const MAX_POLAR_ANGLE: f64 = std::f64::consts::FRAC_PI_2;
