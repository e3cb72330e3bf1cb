//! Renderable geometry: a shape bound to its material and emission.

use crate::{Color, Material, Shape};
use glint_math::{DVec3, Point, Ray};

/// A shape placed in a scene, with the surface properties the shading
/// engine needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    shape: Shape,
    material: Material,
    emission: Color,
}

impl Geometry {
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            material: Material::default(),
            emission: Color::ZERO,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        self.shape.intersect(ray)
    }

    pub fn normal_at(&self, point: Point) -> DVec3 {
        self.shape.normal_at(point)
    }
}

/// A hit record: the surface point together with the geometry it lies on.
///
/// Equality means the same geometry instance (by reference identity) and
/// the same point.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint<'a> {
    pub geometry: &'a Geometry,
    pub point: Point,
}

impl PartialEq for GeoPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.geometry, other.geometry) && self.point == other.point
    }
}
