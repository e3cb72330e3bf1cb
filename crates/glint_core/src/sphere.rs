//! Sphere primitive.

use crate::GeometryError;
use glint_math::{align_zero, DVec3, Point, Ray};

/// A sphere with a positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Ray-sphere intersection via the projection decomposition.
    ///
    /// `tm` is the projection of the center onto the ray, `d` the
    /// perpendicular distance, `th` the half-chord. Tangent rays
    /// (`d >= r` after zero alignment) miss; hits behind the origin are
    /// dropped; two hits come back nearest-first.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        // Ray starting at the center hits straight ahead at t = radius.
        if self.center == ray.origin {
            return Some(vec![ray.at(self.radius)]);
        }

        let u = self.center - ray.origin;
        let tm = ray.direction.dot(u);
        let d = align_zero((u.length_squared() - tm * tm).sqrt());
        if d >= self.radius {
            return None;
        }

        let th = (self.radius * self.radius - d * d).sqrt();
        let t1 = align_zero(tm + th);
        let t2 = align_zero(tm - th);

        match (t2 > 0.0, t1 > 0.0) {
            (true, true) => Some(vec![ray.at(t2), ray.at(t1)]),
            (true, false) => Some(vec![ray.at(t2)]),
            (false, true) => Some(vec![ray.at(t1)]),
            (false, false) => None,
        }
    }

    pub fn normal_at(&self, point: Point) -> DVec3 {
        (point - self.center).normalize()
    }
}
