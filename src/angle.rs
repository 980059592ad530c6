//! Different units for angles.

use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Degrees {
    /// Creates a zero angle.
    #[inline]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the value of the angle in radians.
    #[inline]
    pub fn radians(self) -> f32 {
        degrees_to_radians(self.0)
    }
}

impl Radians {
    /// Creates a zero angle.
    #[inline]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the value of the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        radians_to_degrees(self.0)
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(deg: Degrees) -> Self {
        Self(deg.radians())
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(rad: Radians) -> Self {
        Self(rad.degrees())
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

/// Converts the given angle in degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts the given angle in radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn converting_zero_degrees_gives_exactly_zero_radians() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_eq!(Degrees::zero().radians(), 0.0);
    }

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(degrees_to_radians(90.0), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(degrees_to_radians(180.0), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(degrees_to_radians(360.0), 2.0 * PI, epsilon = 1e-6);
        assert_abs_diff_eq!(degrees_to_radians(-90.0), -PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(radians_to_degrees(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(radians_to_degrees(PI / 2.0), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(radians_to_degrees(PI), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(radians_to_degrees(-PI), -180.0, epsilon = 1e-4);
    }

    #[test]
    fn converting_between_angle_units_round_trips() {
        let angle = Degrees(42.0);
        let back = Degrees::from(Radians::from(angle));
        assert_abs_diff_eq!(back, angle, epsilon = 1e-4);

        assert_abs_diff_eq!(Radians::from(Degrees(180.0)), Radians(PI), epsilon = 1e-6);
    }
}
