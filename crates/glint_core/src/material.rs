//! Phong material coefficients.

use crate::Color;
use glint_math::DVec3;

/// How a surface responds to light.
///
/// All coefficients are per-channel weights in [0, 1]. `kd`/`ks` govern the
/// local diffuse and specular terms, `kr`/`kt` the recursive reflection and
/// transmission branches. The default material is fully absorbing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse coefficient
    pub kd: Color,
    /// Specular coefficient
    pub ks: Color,
    /// Phong shininess exponent
    pub shininess: i32,
    /// Reflection coefficient
    pub kr: Color,
    /// Transmission (refraction) coefficient
    pub kt: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: Color::ZERO,
            ks: Color::ZERO,
            shininess: 0,
            kr: Color::ZERO,
            kt: Color::ZERO,
        }
    }
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diffuse coefficient; a scalar broadcasts to all channels.
    pub fn with_kd(mut self, kd: impl Into<Coefficient>) -> Self {
        self.kd = kd.into().0;
        self
    }

    /// Set the specular coefficient; a scalar broadcasts to all channels.
    pub fn with_ks(mut self, ks: impl Into<Coefficient>) -> Self {
        self.ks = ks.into().0;
        self
    }

    /// Set the Phong shininess exponent.
    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set the reflection coefficient; a scalar broadcasts to all channels.
    pub fn with_kr(mut self, kr: impl Into<Coefficient>) -> Self {
        self.kr = kr.into().0;
        self
    }

    /// Set the transmission coefficient; a scalar broadcasts to all channels.
    pub fn with_kt(mut self, kt: impl Into<Coefficient>) -> Self {
        self.kt = kt.into().0;
        self
    }
}

/// A per-channel weight, constructible from a scalar or an RGB triple.
#[derive(Debug, Clone, Copy)]
pub struct Coefficient(pub Color);

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient(DVec3::splat(value))
    }
}

impl From<Color> for Coefficient {
    fn from(value: Color) -> Self {
        Coefficient(value)
    }
}
