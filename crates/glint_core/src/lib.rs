//! Scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Plane`, `Sphere`, `Triangle`, `Polygon`, `Tube`,
//!   `Cylinder`, each with ray intersection and surface-normal queries
//! - **Scene state**: `Material`, light sources, and the `Scene` aggregate
//!   the renderer traces against
//!
//! Degenerate geometry (zero-length normals, non-positive radii, collinear
//! vertices) fails at construction time with a [`GeometryError`]; numeric
//! edge cases at query time (parallel or tangent rays, grazing incidence)
//! resolve to "no intersection" instead.

mod error;
mod geometry;
mod light;
mod material;
mod plane;
mod polygon;
mod scene;
mod shape;
mod sphere;
mod tube;

pub use error::GeometryError;
pub use geometry::{GeoPoint, Geometry};
pub use light::{AmbientLight, Light, PointLight, SpotLight};
pub use material::{Coefficient, Material};
pub use plane::Plane;
pub use polygon::{Polygon, Triangle};
pub use scene::Scene;
pub use shape::Shape;
pub use sphere::Sphere;
pub use tube::{Cylinder, Tube};

/// RGB radiance. Channels are non-negative and unbounded above; clamping
/// to a displayable range happens only at image-write time.
pub type Color = glint_math::DVec3;
