//! Planar convex polygon and triangle primitives.

use crate::{GeometryError, Plane};
use glint_math::{align_zero, is_zero, DVec3, Point, Ray};

/// A planar convex polygon with an open boundary: points exactly on an
/// edge or vertex do not count as intersections.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    plane: Plane,
}

impl Polygon {
    /// Build a polygon from at least three coplanar vertices forming a
    /// convex loop.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        let normal = plane.normal();

        for vertex in &vertices[3..] {
            if !is_zero(normal.dot(*vertex - vertices[0])) {
                return Err(GeometryError::NotCoplanar);
            }
        }

        // Consecutive edge turns must all bend the same way around the
        // plane normal, with no repeated vertices.
        let n = vertices.len();
        let mut reference_sign = 0.0_f64;
        for i in 0..n {
            let edge1 = vertices[(i + 1) % n] - vertices[i];
            let edge2 = vertices[(i + 2) % n] - vertices[(i + 1) % n];
            let turn = align_zero(edge1.cross(edge2).dot(normal));
            if turn == 0.0 {
                return Err(GeometryError::NotConvex);
            }
            if reference_sign == 0.0 {
                reference_sign = turn;
            } else if reference_sign * turn < 0.0 {
                return Err(GeometryError::NotConvex);
            }
        }

        Ok(Self { vertices, plane })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Intersect the supporting plane, then run the same-side edge test:
    /// the signs of `dir . ((vi - o) x (vi+1 - o))` must all agree
    /// strictly. Any zero sign means the hit lies on an edge or vertex
    /// and is rejected.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        let hits = self.plane.intersect(ray)?;

        let n = self.vertices.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let vi = self.vertices[i] - ray.origin;
            let vj = self.vertices[(i + 1) % n] - ray.origin;
            let edge_normal = vi.cross(vj).try_normalize()?;
            let s = align_zero(ray.direction.dot(edge_normal));
            if s == 0.0 {
                return None;
            }
            if sign == 0.0 {
                sign = s;
            } else if sign * s < 0.0 {
                return None;
            }
        }
        Some(hits)
    }

    pub fn normal_at(&self, _point: Point) -> DVec3 {
        self.plane.normal()
    }
}

/// A triangle, the three-vertex polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    pub fn new(d1: Point, d2: Point, d3: Point) -> Result<Self, GeometryError> {
        Ok(Self {
            polygon: Polygon::new(vec![d1, d2, d3])?,
        })
    }

    pub fn intersect(&self, ray: &Ray) -> Option<Vec<Point>> {
        self.polygon.intersect(ray)
    }

    pub fn normal_at(&self, point: Point) -> DVec3 {
        self.polygon.normal_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::is_zero;

    fn fixture_triangle() -> Triangle {
        Triangle::new(
            Point::new(-1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(0.0, 2.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_validation() {
        assert_eq!(
            Polygon::new(vec![Point::ZERO, Point::X]),
            Err(GeometryError::TooFewVertices(2))
        );
        assert_eq!(
            Polygon::new(vec![Point::ZERO, Point::X, Point::new(2.0, 0.0, 0.0)]),
            Err(GeometryError::CollinearVertices)
        );
        // Fourth vertex off the supporting plane.
        assert_eq!(
            Polygon::new(vec![
                Point::new(0.0, 0.0, 1.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
                Point::new(0.0, 0.0, 2.0),
            ]),
            Err(GeometryError::NotCoplanar)
        );
        // Concave quad.
        assert_eq!(
            Polygon::new(vec![
                Point::new(0.0, 0.0, 0.0),
                Point::new(2.0, 0.0, 0.0),
                Point::new(2.0, 2.0, 0.0),
                Point::new(1.5, 0.5, 0.0),
            ]),
            Err(GeometryError::NotConvex)
        );
    }

    #[test]
    fn test_normal_is_unit_and_orthogonal() {
        let triangle = fixture_triangle();
        let normal = triangle.normal_at(Point::new(0.0, 1.0, 1.0));
        assert!(is_zero(normal.length() - 1.0));
        let edge = Point::new(1.0, 0.0, 1.0) - Point::new(-1.0, 0.0, 1.0);
        assert!(is_zero(normal.dot(edge)));
    }

    #[test]
    fn test_hit_inside() {
        let triangle = fixture_triangle();
        let ray = Ray::new(Point::new(0.0, 2.0, 0.0), DVec3::new(0.0, -1.0, 1.0));
        assert_eq!(triangle.intersect(&ray), Some(vec![Point::new(0.0, 1.0, 1.0)]));
    }

    #[test]
    fn test_miss_outside() {
        let triangle = fixture_triangle();
        // Outside, opposite a side.
        let ray = Ray::new(Point::new(0.0, 2.0, 0.0), DVec3::new(2.0, -1.0, 1.0));
        assert_eq!(triangle.intersect(&ray), None);
        // Outside, opposite a vertex.
        let ray = Ray::new(Point::new(0.0, 3.0, 0.0), DVec3::new(0.0, 0.5, 1.0));
        assert_eq!(triangle.intersect(&ray), None);
    }

    #[test]
    fn test_open_boundary() {
        let triangle = fixture_triangle();
        // On an edge.
        let ray = Ray::new(Point::new(0.0, 2.0, 0.0), DVec3::new(-0.5, -1.0, 1.0));
        assert_eq!(triangle.intersect(&ray), None);
        // On a vertex.
        let ray = Ray::new(Point::new(0.0, 2.0, 0.0), DVec3::new(1.0, -2.0, 1.0));
        assert_eq!(triangle.intersect(&ray), None);
        // On the continuation of an edge.
        let ray = Ray::new(Point::new(0.0, 2.0, 0.0), DVec3::new(-2.0, -2.0, 1.0));
        assert_eq!(triangle.intersect(&ray), None);
    }

    #[test]
    fn test_convex_quad_hit() {
        let quad = Polygon::new(vec![
            Point::new(-1.0, -1.0, 2.0),
            Point::new(1.0, -1.0, 2.0),
            Point::new(1.0, 1.0, 2.0),
            Point::new(-1.0, 1.0, 2.0),
        ])
        .unwrap();
        let ray = Ray::new(Point::ZERO, DVec3::Z);
        assert_eq!(quad.intersect(&ray), Some(vec![Point::new(0.0, 0.0, 2.0)]));
    }
}
