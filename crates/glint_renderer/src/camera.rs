//! Pinhole camera: ray construction through a view plane, anti-aliasing
//! strategies, and the sequential or multi-threaded render loop.

use crate::{Framebuffer, PixelDispenser, RayTracer};
use glint_core::Color;
use glint_math::{is_zero, DVec3, Point, Ray};
use std::time::Instant;

/// How many worker threads a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadCount {
    /// Render on the calling thread only.
    #[default]
    Off,
    /// Exactly this many workers.
    Fixed(usize),
    /// All cores minus a small reserve for the rest of the system.
    Auto,
}

impl ThreadCount {
    /// Reserved cores under [`ThreadCount::Auto`].
    const SPARE_THREADS: usize = 2;

    fn workers(self) -> usize {
        match self {
            ThreadCount::Off => 0,
            ThreadCount::Fixed(n) => n,
            ThreadCount::Auto => std::thread::available_parallelism()
                .map(|n| n.get().saturating_sub(Self::SPARE_THREADS))
                .unwrap_or(1)
                .max(1),
        }
    }
}

/// Per-pixel sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// One ray through the pixel center.
    #[default]
    Single,
    /// A fixed grid of sub-pixel rays plus the center ray, averaged.
    Grid { samples: u32 },
    /// Recursive corner sampling that subdivides only where the pixel's
    /// colors disagree, down to the given depth.
    Adaptive { depth: u32 },
}

/// Rejected camera configurations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CameraError {
    #[error("camera location was not set")]
    MissingLocation,
    #[error("camera direction was not set")]
    MissingDirection,
    #[error("camera direction vectors must be non-zero")]
    ZeroDirection,
    #[error("camera to and up vectors must be orthogonal")]
    NotOrthogonal,
    #[error("view plane dimensions and distance must be positive")]
    InvalidViewPlane,
    #[error("resolution must be at least 1x1")]
    InvalidResolution,
}

/// Accumulates camera settings; [`CameraBuilder::build`] validates them.
#[derive(Debug, Clone, Default)]
pub struct CameraBuilder {
    location: Option<Point>,
    direction: Option<(DVec3, DVec3)>,
    width: f64,
    height: f64,
    distance: f64,
    nx: u32,
    ny: u32,
    sampling: Sampling,
    threads: ThreadCount,
}

impl CameraBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the forward and up vectors. They must be orthogonal; both are
    /// normalized at build time.
    pub fn with_direction(mut self, to: DVec3, up: DVec3) -> Self {
        self.direction = Some((to, up));
        self
    }

    pub fn with_view_plane(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_resolution(mut self, nx: u32, ny: u32) -> Self {
        self.nx = nx;
        self.ny = ny;
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_threads(mut self, threads: ThreadCount) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> Result<Camera, CameraError> {
        let location = self.location.ok_or(CameraError::MissingLocation)?;
        let (to, up) = self.direction.ok_or(CameraError::MissingDirection)?;
        let v_to = to.try_normalize().ok_or(CameraError::ZeroDirection)?;
        let v_up = up.try_normalize().ok_or(CameraError::ZeroDirection)?;
        if !is_zero(v_to.dot(v_up)) {
            return Err(CameraError::NotOrthogonal);
        }
        if self.width <= 0.0 || self.height <= 0.0 || self.distance <= 0.0 {
            return Err(CameraError::InvalidViewPlane);
        }
        if self.nx == 0 || self.ny == 0 {
            return Err(CameraError::InvalidResolution);
        }
        Ok(Camera {
            location,
            v_to,
            v_up,
            v_right: v_to.cross(v_up).normalize(),
            width: self.width,
            height: self.height,
            distance: self.distance,
            nx: self.nx,
            ny: self.ny,
            sampling: self.sampling,
            threads: self.threads,
        })
    }
}

/// A validated pinhole camera with its view plane and render settings.
#[derive(Debug, Clone)]
pub struct Camera {
    location: Point,
    v_to: DVec3,
    v_up: DVec3,
    v_right: DVec3,
    width: f64,
    height: f64,
    distance: f64,
    nx: u32,
    ny: u32,
    sampling: Sampling,
    threads: ThreadCount,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.nx, self.ny)
    }

    /// Center of pixel `(col, row)` on the view plane. Zero offsets are
    /// skipped so the central pixel involves no vector arithmetic noise.
    fn pixel_center(&self, col: u32, row: u32) -> Point {
        let pc = self.location + self.v_to * self.distance;
        let rx = self.width / self.nx as f64;
        let ry = self.height / self.ny as f64;
        let xj = (col as f64 - (self.nx as f64 - 1.0) / 2.0) * rx;
        let yi = -(row as f64 - (self.ny as f64 - 1.0) / 2.0) * ry;
        let mut pij = pc;
        if xj != 0.0 {
            pij += self.v_right * xj;
        }
        if yi != 0.0 {
            pij += self.v_up * yi;
        }
        pij
    }

    /// A ray from the camera through the center of pixel `(col, row)`.
    pub fn construct_ray(&self, col: u32, row: u32) -> Ray {
        Ray::new(self.location, self.pixel_center(col, row) - self.location)
    }

    /// Rays through a `k`-by-`k` grid of sub-cells of pixel `(col, row)`,
    /// where `k = floor(sqrt(samples))`, plus the center ray.
    pub fn construct_beam(&self, col: u32, row: u32, samples: u32) -> Vec<Ray> {
        let k = (samples as f64).sqrt().floor() as u32;
        if k <= 1 {
            return vec![self.construct_ray(col, row)];
        }
        let center = self.pixel_center(col, row);
        let rx = self.width / self.nx as f64;
        let ry = self.height / self.ny as f64;
        let mut rays = Vec::with_capacity((k * k + 1) as usize);
        for i in 0..k {
            for j in 0..k {
                let dx = ((i as f64 + 0.5) / k as f64 - 0.5) * rx;
                let dy = ((j as f64 + 0.5) / k as f64 - 0.5) * ry;
                let target = center + self.v_right * dx + self.v_up * dy;
                rays.push(Ray::new(self.location, target - self.location));
            }
        }
        rays.push(Ray::new(self.location, center - self.location));
        rays
    }

    /// Resolve one pixel's color with the configured sampling strategy.
    fn render_pixel(&self, tracer: &RayTracer<'_>, col: u32, row: u32) -> Color {
        match self.sampling {
            Sampling::Single => tracer.trace_ray(&self.construct_ray(col, row)),
            Sampling::Grid { samples } => {
                tracer.trace_beam(&self.construct_beam(col, row, samples))
            }
            Sampling::Adaptive { depth } => {
                let rx = self.width / self.nx as f64;
                let ry = self.height / self.ny as f64;
                let scale = f64::from(2u32.pow(depth));
                tracer.adaptive_sample(
                    self.pixel_center(col, row),
                    rx,
                    ry,
                    rx / scale,
                    ry / scale,
                    self.location,
                    self.v_right,
                    self.v_up,
                    &[],
                )
            }
        }
    }

    /// Render the whole image.
    ///
    /// With [`ThreadCount::Off`] the loop runs on the calling thread.
    /// Otherwise workers in a dedicated rayon pool pull pixels from a
    /// [`PixelDispenser`] and send finished colors over a channel to the
    /// calling thread, which owns the framebuffer. Each pixel is claimed
    /// and written exactly once, and the image is identical to the
    /// sequential one.
    pub fn render(&self, tracer: &RayTracer<'_>) -> Framebuffer {
        let start = Instant::now();
        let mut framebuffer = Framebuffer::new(self.nx, self.ny);
        let workers = self.threads.workers();

        if workers == 0 {
            for row in 0..self.ny {
                for col in 0..self.nx {
                    framebuffer.write_pixel(col, row, self.render_pixel(tracer, col, row));
                }
            }
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .expect("failed to build render thread pool");
            let dispenser = PixelDispenser::new(self.nx, self.ny);
            let (tx, rx) = std::sync::mpsc::channel::<(u32, u32, Color)>();

            pool.in_place_scope(|scope| {
                for _ in 0..workers {
                    let tx = tx.clone();
                    let dispenser = &dispenser;
                    scope.spawn(move |_| {
                        while let Some((col, row)) = dispenser.claim() {
                            let color = self.render_pixel(tracer, col, row);
                            if tx.send((col, row, color)).is_err() {
                                break;
                            }
                            dispenser.mark_done();
                        }
                    });
                }
                drop(tx);
                for (col, row, color) in rx {
                    framebuffer.write_pixel(col, row, color);
                }
            });
        }

        log::info!(
            "rendered {}x{} ({} workers) in {:.2?}",
            self.nx,
            self.ny,
            workers,
            start.elapsed()
        );
        framebuffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> CameraBuilder {
        Camera::builder()
            .with_location(Point::ZERO)
            .with_direction(-DVec3::Z, DVec3::Y)
            .with_view_plane(2.0, 2.0)
            .with_distance(1.0)
            .with_resolution(2, 2)
    }

    #[test]
    fn test_build_rejects_missing_location() {
        let err = CameraBuilder::new()
            .with_direction(-DVec3::Z, DVec3::Y)
            .with_view_plane(1.0, 1.0)
            .with_distance(1.0)
            .with_resolution(1, 1)
            .build()
            .unwrap_err();
        assert_eq!(err, CameraError::MissingLocation);
    }

    #[test]
    fn test_build_rejects_non_orthogonal_direction() {
        let err = base_builder()
            .with_direction(DVec3::new(0.0, 1.0, -1.0), DVec3::Y)
            .build()
            .unwrap_err();
        assert_eq!(err, CameraError::NotOrthogonal);
    }

    #[test]
    fn test_build_rejects_bad_view_plane() {
        let err = base_builder().with_distance(0.0).build().unwrap_err();
        assert_eq!(err, CameraError::InvalidViewPlane);
        let err = base_builder().with_view_plane(-1.0, 1.0).build().unwrap_err();
        assert_eq!(err, CameraError::InvalidViewPlane);
    }

    #[test]
    fn test_build_rejects_zero_resolution() {
        let err = base_builder().with_resolution(0, 4).build().unwrap_err();
        assert_eq!(err, CameraError::InvalidResolution);
    }

    #[test]
    fn test_center_pixel_ray_goes_straight() {
        let camera = base_builder().with_resolution(3, 3).build().unwrap();
        let ray = camera.construct_ray(1, 1);
        assert_eq!(ray.origin, Point::ZERO);
        assert_eq!(ray.direction, -DVec3::Z);
    }

    #[test]
    fn test_corner_pixel_rays() {
        // 2x2 view plane, 2x2 resolution: pixel centers at +-0.5.
        let camera = base_builder().build().unwrap();
        let ray = camera.construct_ray(0, 0);
        // Top-left pixel: v_right = to x up = +X, so col 0 sits at -X, up.
        let expected = DVec3::new(-0.5, 0.5, -1.0).normalize();
        assert!((ray.direction - expected).length() < 1e-12);
    }

    #[test]
    fn test_beam_covers_subcells() {
        let camera = base_builder().build().unwrap();
        let rays = camera.construct_beam(0, 0, 9);
        // 3x3 sub-cells plus the center ray.
        assert_eq!(rays.len(), 10);
        for ray in &rays {
            assert_eq!(ray.origin, Point::ZERO);
        }
    }

    #[test]
    fn test_beam_of_one_is_center_ray() {
        let camera = base_builder().build().unwrap();
        let rays = camera.construct_beam(1, 1, 1);
        assert_eq!(rays.len(), 1);
        assert_eq!(rays[0].direction, camera.construct_ray(1, 1).direction);
    }
}
