//! 3D World Vector
//!
//! Positions on the track use three axes: X across the lanes, Y for
//! height, Z for depth. Plain f32 components; the simulation keeps its
//! determinism by fixing the frame delta inputs, not the arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A 3D vector with f32 components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component (across lanes)
    pub x: f32,
    /// Y component (height)
    pub y: f32,
    /// Z component (depth along the track)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (origin)
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Add another vector.
    #[inline]
    pub fn add(self, other: Vec3) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtract another vector.
    #[inline]
    pub fn sub(self, other: Vec3) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiply by a scalar.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude).
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Vec3) -> f32 {
        self.sub(other).length_squared()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation toward another point; `t` is clamped to [0, 1].
    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self.add(other.sub(self).scale(t))
    }
}

// Operator overloads

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::add(self, other)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::sub(self, other)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_zero() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_add_sub() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_scale_and_neg() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(v.scale(2.0), Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_length() {
        // 3-4-5 triangle in the XY plane
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, -10.0);
        let b = Vec3::new(0.0, 0.0, 10.0);
        assert_eq!(a.distance(b), 20.0);
    }

    #[test]
    fn test_lerp() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, -20.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 0.0, -10.0));
        // t clamps
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_display() {
        let v = Vec3::new(1.5, 0.0, -2.25);
        assert_eq!(format!("{}", v), "(1.50, 0.00, -2.25)");
    }
}
