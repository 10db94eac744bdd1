use cgmath::{InnerSpace, Vector4, Zero};
use rand::Rng;

/// A point or direction in the 4D parameter space.
///
/// Every operation returns a fresh value; nothing mutates in place, so waypoint
/// history can hold copies without aliasing concerns.
#[derive(Copy, Clone, PartialEq, Debug)]
#[repr(transparent)]
pub struct Vec4(Vector4<f64>);

impl Vec4 {
    pub const ZERO: Self = Self(Vector4 { x: 0.0, y: 0.0, z: 0.0, w: 0.0 });

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(Vector4 { x, y, z, w })
    }

    /// Each component drawn independently from `[-magnitude, magnitude)`.
    pub fn random_deviate<R: Rng + ?Sized>(rng: &mut R, magnitude: f64) -> Self {
        let mut deviate = || (rng.gen::<f64>() * 2.0 - 1.0) * magnitude;
        Self::new(deviate(), deviate(), deviate(), deviate())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }
    pub fn y(&self) -> f64 {
        self.0.y
    }
    pub fn z(&self) -> f64 {
        self.0.z
    }
    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn to_array(&self) -> [f64; 4] {
        self.0.into()
    }

    pub fn to_f32_array(&self) -> [f32; 4] {
        [self.0.x as f32, self.0.y as f32, self.0.z as f32, self.0.w as f32]
    }

    pub fn dot(&self, other: Vec4) -> f64 {
        self.0.dot(other.0)
    }

    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Unit vector in the same direction. A zero-length vector is returned as is.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length > 0.0 {
            *self * (1.0 / length)
        } else {
            *self
        }
    }

    /// `self * (1 - t) + other * t`, exact at both ends.
    pub fn lerp(&self, other: Vec4, t: f64) -> Self {
        *self * (1.0 - t) + other * t
    }

    /// Removes the component along `direction`, which must be unit length.
    pub fn project_out(&self, direction: Vec4) -> Self {
        *self - direction * self.dot(direction)
    }
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::ops::Add for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::Sub for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl core::ops::Mul<f64> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl std::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2}, {:.2}, {:.2}, {:.2}",
            self.0.x, self.0.y, self.0.z, self.0.w
        )
    }
}
