// Re-export glam for convenience
pub use glam::*;

/// Positions in world space. Directions use `DVec3` directly; the
/// non-zero invariant for directions is enforced where it matters
/// (ray construction, plane normals, camera basis vectors).
pub type Point = DVec3;

mod ray;
mod util;

pub use ray::{Ray, DELTA};
pub use util::{align_zero, almost_equal, is_zero};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(1.0, 2.0, 3.0);
        let v = DVec3::new(0.0, 1.0, 0.0);
        assert_eq!(p + v, Point::new(1.0, 3.0, 3.0));
        assert_eq!(p - Point::new(1.0, 1.0, 1.0), DVec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_cross_product_is_orthogonal() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(-2.0, 4.0, 1.0);
        let c = a.cross(b);
        assert!(is_zero(c.dot(a)));
        assert!(is_zero(c.dot(b)));
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = DVec3::new(3.0, -4.0, 0.0).normalize();
        assert!(is_zero(v.length() - 1.0));
    }
}
