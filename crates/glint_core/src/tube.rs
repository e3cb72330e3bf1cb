//! Infinite tube and finite cylinder primitives.

use crate::GeometryError;
use glint_math::{align_zero, is_zero, DVec3, Point, Ray};

/// An infinite cylinder around a ray axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    pub fn new(axis: Ray, radius: f64) -> Result<Self, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { axis, radius })
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Axis parameter of the projection of `point` onto the axis.
    fn axis_projection(&self, point: Point) -> f64 {
        align_zero(self.axis.direction.dot(point - self.axis.origin))
    }

    /// Lateral-surface intersection: a quadratic in the plane
    /// perpendicular to the axis. A ray parallel to the axis is the
    /// degenerate linear case and yields no intersection; so do tangent
    /// rays.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        let v = self.axis.direction;
        let d_perp = ray.direction - v * ray.direction.dot(v);
        let a = d_perp.length_squared();
        if is_zero(a) {
            return None;
        }

        let dp = ray.origin - self.axis.origin;
        let dp_perp = dp - v * dp.dot(v);
        let b = 2.0 * d_perp.dot(dp_perp);
        let c = dp_perp.length_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();

        let t1 = align_zero((-b - sqrt_disc) / (2.0 * a));
        let t2 = align_zero((-b + sqrt_disc) / (2.0 * a));
        let hits: Vec<Point> = [t1, t2]
            .into_iter()
            .filter(|&t| t > 0.0)
            .map(|t| ray.at(t))
            .collect();
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    /// Normal: from the point to its projection onto the axis.
    pub fn normal_at(&self, point: Point) -> DVec3 {
        let t = self.axis_projection(point);
        let foot = if t == 0.0 { self.axis.origin } else { self.axis.at(t) };
        (point - foot).normalize()
    }
}

/// A tube bounded by a height along its axis, closed by two end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
}

impl Cylinder {
    pub fn new(axis: Ray, radius: f64, height: f64) -> Result<Self, GeometryError> {
        if height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        Ok(Self {
            tube: Tube::new(axis, radius)?,
            height,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Lateral hits restricted to the open span (0, height), plus hits on
    /// either cap disk. Points on a cap rim fall outside both and miss.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        let axis = self.tube.axis;
        let mut hits: Vec<Point> = Vec::new();

        if let Some(lateral) = self.tube.intersect(ray) {
            hits.extend(lateral.into_iter().filter(|&p| {
                let t = self.tube.axis_projection(p);
                t > 0.0 && t < self.height
            }));
        }

        // Cap disks: both cap planes share the axis direction as their
        // normal, so one denominator covers both.
        let denominator = align_zero(ray.direction.dot(axis.direction));
        if denominator != 0.0 {
            let radius_squared = self.tube.radius * self.tube.radius;
            for center in [axis.origin, axis.at(self.height)] {
                let t = align_zero(axis.direction.dot(center - ray.origin) / denominator);
                if t > 0.0 {
                    let p = ray.at(t);
                    if align_zero((p - center).length_squared() - radius_squared) < 0.0 {
                        hits.push(p);
                    }
                }
            }
        }

        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    /// Lateral normal away from the axis, or the (outward) axis direction
    /// on either end cap.
    pub fn normal_at(&self, point: Point) -> DVec3 {
        let t = self.tube.axis_projection(point);
        if is_zero(t) {
            -self.tube.axis.direction
        } else if is_zero(t - self.height) {
            self.tube.axis.direction
        } else {
            self.tube.normal_at(point)
        }
    }
}
