//! Infinite plane primitive.

use crate::GeometryError;
use glint_math::{align_zero, is_zero, DVec3, Point, Ray};

/// A plane defined by a reference point and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    q: Point,
    normal: DVec3,
}

impl Plane {
    /// Plane through `point` with the given normal.
    pub fn new(point: Point, normal: DVec3) -> Result<Self, GeometryError> {
        let normal = normal.try_normalize().ok_or(GeometryError::ZeroNormal)?;
        Ok(Self { q: point, normal })
    }

    /// Plane through three non-collinear points.
    pub fn from_points(d1: Point, d2: Point, d3: Point) -> Result<Self, GeometryError> {
        let normal = (d2 - d1)
            .cross(d2 - d3)
            .try_normalize()
            .ok_or(GeometryError::CollinearVertices)?;
        Ok(Self { q: d1, normal })
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Reference point the plane was constructed from.
    pub fn q(&self) -> Point {
        self.q
    }

    /// Ray-plane intersection.
    ///
    /// Rays parallel to the plane and rays whose origin lies on the
    /// reference point yield no intersection; only hits strictly in front
    /// of the origin are returned.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        if ray.origin == self.q {
            return None;
        }
        let denominator = self.normal.dot(ray.direction);
        if is_zero(denominator) {
            return None;
        }
        let numerator = self.normal.dot(self.q - ray.origin);
        let t = align_zero(numerator / denominator);
        if t > 0.0 {
            Some(vec![ray.at(t)])
        } else {
            None
        }
    }

    pub fn normal_at(&self, _point: Point) -> DVec3 {
        self.normal
    }
}
