//! Light sources.

use crate::Color;
use glint_math::{DVec3, Point};

/// Uniform background illumination, applied once at the top of the
/// shading recursion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl Default for AmbientLight {
    fn default() -> Self {
        AmbientLight::NONE
    }
}

impl AmbientLight {
    /// No ambient light.
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::ZERO,
    };

    /// Ambient light with base intensity `ia` scaled by attenuation `ka`.
    pub fn new(ia: Color, ka: impl Into<crate::material::Coefficient>) -> Self {
        Self {
            intensity: ia * ka.into().0,
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

/// An isotropic light at a position, attenuated by distance:
/// `I / (kc + kl*d + kq*d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub intensity: Color,
    pub position: Point,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    pub fn new(intensity: Color, position: Point) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    /// Set the constant attenuation factor.
    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    /// Set the linear attenuation factor.
    pub fn with_kl(mut self, kl: f64) -> Self {
        self.kl = kl;
        self
    }

    /// Set the quadratic attenuation factor.
    pub fn with_kq(mut self, kq: f64) -> Self {
        self.kq = kq;
        self
    }

    fn attenuation(&self, point: Point) -> f64 {
        let distance = self.position.distance(point);
        self.kc + self.kl * distance + self.kq * distance * distance
    }

    fn intensity_at(&self, point: Point) -> Color {
        self.intensity / self.attenuation(point)
    }

    /// Unit vector from the light toward `point`.
    fn l(&self, point: Point) -> DVec3 {
        (point - self.position).normalize()
    }

    fn distance(&self, point: Point) -> f64 {
        self.position.distance(point)
    }
}

/// A point light restricted to a cone: intensity additionally scales by
/// `max(0, direction . l)`, optionally raised to a narrow-beam exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: DVec3,
    beam: i32,
}

impl SpotLight {
    /// # Panics
    ///
    /// Panics if `direction` is the zero vector.
    pub fn new(intensity: Color, position: Point, direction: DVec3) -> Self {
        let direction = direction
            .try_normalize()
            .expect("spot light direction must be a non-zero vector");
        Self {
            light: PointLight::new(intensity, position),
            direction,
            beam: 1,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.light = self.light.with_kc(kc);
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.light = self.light.with_kl(kl);
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.light = self.light.with_kq(kq);
        self
    }

    /// Sharpen the cone by raising the angular factor to `beam`.
    pub fn with_narrow_beam(mut self, beam: i32) -> Self {
        self.beam = beam;
        self
    }

    fn intensity_at(&self, point: Point) -> Color {
        let cos = self.direction.dot(self.light.l(point)).max(0.0);
        self.light.intensity_at(point) * cos.powi(self.beam)
    }
}

/// The closed set of directional light sources a scene can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {
    /// Intensity arriving at `point`, after attenuation.
    pub fn intensity_at(&self, point: Point) -> Color {
        match self {
            Light::Point(light) => light.intensity_at(point),
            Light::Spot(light) => light.intensity_at(point),
        }
    }

    /// Unit vector from the light toward `point`.
    pub fn l(&self, point: Point) -> DVec3 {
        match self {
            Light::Point(light) => light.l(point),
            Light::Spot(light) => light.light.l(point),
        }
    }

    /// Distance from the light to `point`, for shadow-range tests.
    pub fn distance(&self, point: Point) -> f64 {
        match self {
            Light::Point(light) => light.distance(point),
            Light::Spot(light) => light.light.distance(point),
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Light::Spot(light)
    }
}
