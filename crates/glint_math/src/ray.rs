use crate::{DVec3, Point};

/// Offset applied by [`Ray::new_offset`] to lift a secondary ray off the
/// surface it starts on, avoiding shadow/reflection acne.
pub const DELTA: f64 = 0.1;

/// A ray in 3D space: an origin point and a unit direction.
///
/// The direction is normalized at construction. Constructing a ray with a
/// zero direction is a programming error and panics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray; `direction` need not be unit length.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is the zero vector.
    pub fn new(origin: Point, direction: DVec3) -> Self {
        let direction = direction
            .try_normalize()
            .expect("ray direction must be a non-zero vector");
        Self { origin, direction }
    }

    /// Create a ray whose origin is moved off the surface along `normal`.
    ///
    /// The offset points to the side of the surface the direction leaves
    /// through, so the ray cannot immediately re-hit its own origin.
    pub fn new_offset(origin: Point, direction: DVec3, normal: DVec3) -> Self {
        let direction = direction
            .try_normalize()
            .expect("ray direction must be a non-zero vector");
        let delta = normal * if direction.dot(normal) > 0.0 { DELTA } else { -DELTA };
        Self {
            origin: origin + delta,
            direction,
        }
    }

    /// Point along the ray at parameter `t`: origin + t * direction.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Index of the candidate point nearest to the ray origin.
    ///
    /// Returns `None` for an empty slice.
    pub fn closest_point_index(&self, points: &[Point]) -> Option<usize> {
        points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (**a - self.origin).length_squared();
                let db = (**b - self.origin).length_squared();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point::ZERO, DVec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!(crate::almost_equal(
            ray.direction,
            DVec3::new(0.0, 0.6, 0.8),
            1e-12
        ));
    }

    #[test]
    #[should_panic]
    fn test_ray_zero_direction_panics() {
        let _ = Ray::new(Point::ZERO, DVec3::ZERO);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::new(1.0, 0.0, 0.0), DVec3::X);
        assert_eq!(ray.at(0.0), Point::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Point::new(3.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point::ZERO);
    }

    #[test]
    fn test_offset_follows_outgoing_side() {
        let normal = DVec3::Z;
        let up = Ray::new_offset(Point::ZERO, DVec3::new(1.0, 0.0, 1.0), normal);
        assert!(up.origin.z > 0.0);

        let down = Ray::new_offset(Point::ZERO, DVec3::new(1.0, 0.0, -1.0), normal);
        assert!(down.origin.z < 0.0);
    }

    #[test]
    fn test_closest_point_index() {
        let ray = Ray::new(Point::new(0.0, 0.0, 10.0), DVec3::new(1.0, 10.0, -100.0));
        let points = vec![
            Point::new(1.0, 1.0, -100.0),
            Point::new(-1.0, 1.0, -99.0),
            Point::new(0.0, 5.0, 0.0),
        ];
        assert_eq!(ray.closest_point_index(&points), Some(2));
        assert_eq!(ray.closest_point_index(&[]), None);
    }
}
