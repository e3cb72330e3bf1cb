//! The scene aggregate the renderer traces against.

use crate::{AmbientLight, Color, GeoPoint, Geometry, Light};
use glint_math::Ray;

/// Geometry, lights, ambient term, and background color.
///
/// Assembled once through the mutators below and read-only for the whole
/// render. Geometry order never affects the image; light order is kept
/// stable (insertion order) for reproducible fixtures.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub name: String,
    pub background: Color,
    pub ambient: AmbientLight,
    geometries: Vec<Geometry>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient(mut self, ambient: AmbientLight) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// All ray-geometry hits across the scene: a linear scan over every
    /// member. `None` when nothing is hit, never an empty list, so
    /// callers can tell "no hit" from "hit at infinity".
    pub fn find_intersections(&self, ray: &Ray) -> Option<Vec<GeoPoint<'_>>> {
        let mut hits: Vec<GeoPoint<'_>> = Vec::new();
        for geometry in &self.geometries {
            if let Some(points) = geometry.intersect(ray) {
                hits.extend(points.into_iter().map(|point| GeoPoint { geometry, point }));
            }
        }
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere, Triangle};
    use glint_math::{DVec3, Point};

    fn test_scene() -> Scene {
        let mut scene = Scene::new("aggregate");
        scene.add_geometry(Geometry::new(
            Sphere::new(Point::new(1.0, 0.0, 0.0), 1.0).unwrap(),
        ));
        scene.add_geometry(Geometry::new(
            Plane::new(Point::new(0.0, 0.0, 5.0), DVec3::Z).unwrap(),
        ));
        scene.add_geometry(Geometry::new(
            Triangle::new(
                Point::new(-1.0, -1.0, 3.0),
                Point::new(1.0, -1.0, 3.0),
                Point::new(0.0, 1.0, 3.0),
            )
            .unwrap(),
        ));
        scene
    }

    #[test]
    fn test_empty_scene_has_no_intersections() {
        let scene = Scene::new("empty");
        let ray = Ray::new(Point::ZERO, DVec3::Z);
        assert!(scene.find_intersections(&ray).is_none());
    }

    #[test]
    fn test_no_shape_hit() {
        let scene = test_scene();
        let ray = Ray::new(Point::new(0.0, 0.0, -1.0), -DVec3::Z);
        assert!(scene.find_intersections(&ray).is_none());
    }

    #[test]
    fn test_some_shapes_hit() {
        let scene = test_scene();
        // Down the z axis from just in front of the sphere: tangent to the
        // sphere (miss), through the triangle interior and the far plane.
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), DVec3::Z);
        let hits = scene.find_intersections(&ray).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_all_shapes_hit() {
        let scene = test_scene();
        let ray = Ray::new(Point::new(0.2, 0.0, -2.0), DVec3::Z);
        let hits = scene.find_intersections(&ray).unwrap();
        // Two sphere hits, one triangle hit, one plane hit.
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_light_order_is_stable() {
        use crate::{PointLight, SpotLight};
        let mut scene = Scene::new("lights");
        scene.add_light(PointLight::new(Color::ONE, Point::ZERO));
        scene.add_light(SpotLight::new(Color::ONE, Point::ZERO, DVec3::Z));
        assert!(matches!(scene.lights()[0], Light::Point(_)));
        assert!(matches!(scene.lights()[1], Light::Spot(_)));
    }
}
