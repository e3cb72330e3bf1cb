//! The closed set of shape variants.

use crate::{Cylinder, Plane, Polygon, Sphere, Triangle, Tube};
use glint_math::{DVec3, Point, Ray};

/// Every shape the tracer can intersect.
///
/// A tagged union instead of an open trait: the intersection protocol is
/// closed, and match exhaustiveness catches a missing variant at compile
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Shape {
    /// All intersection points of `ray` with this shape, or `None`.
    ///
    /// Ordering of multiple hits is shape-specific; callers sort by
    /// distance when they need the nearest.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
            Shape::Polygon(polygon) => polygon.intersect(ray),
            Shape::Tube(tube) => tube.intersect(ray),
            Shape::Cylinder(cylinder) => cylinder.intersect(ray),
        }
    }

    /// Unit surface normal at a point on the shape.
    pub fn normal_at(&self, point: Point) -> DVec3 {
        match self {
            Shape::Plane(plane) => plane.normal_at(point),
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Triangle(triangle) => triangle.normal_at(point),
            Shape::Polygon(polygon) => polygon.normal_at(point),
            Shape::Tube(tube) => tube.normal_at(point),
            Shape::Cylinder(cylinder) => cylinder.normal_at(point),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Tube> for Shape {
    fn from(tube: Tube) -> Self {
        Shape::Tube(tube)
    }
}

impl From<Cylinder> for Shape {
    fn from(cylinder: Cylinder) -> Self {
        Shape::Cylinder(cylinder)
    }
}
