use thiserror::Error;

/// Construction-time validation failures for geometric primitives.
///
/// These are surfaced when a shape is built, never during intersection
/// queries.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("normal must be a non-zero vector")]
    ZeroNormal,

    #[error("plane vertices are collinear")]
    CollinearVertices,

    #[error("radius must be positive (got {0})")]
    NonPositiveRadius(f64),

    #[error("height must be positive (got {0})")]
    NonPositiveHeight(f64),

    #[error("polygon needs at least 3 vertices (got {0})")]
    TooFewVertices(usize),

    #[error("polygon vertices are not coplanar")]
    NotCoplanar,

    #[error("polygon must be convex with distinct vertices")]
    NotConvex,
}
