//! The recursive Whitted shading engine.
//!
//! Local Phong lighting with accumulated-transparency shadows, plus
//! recursive reflection and refraction branches. Two cutoffs bound the
//! recursion: a fixed depth and an importance factor accumulated along
//! each branch.

use glint_core::{Color, GeoPoint, Light, Scene};
use glint_math::{align_zero, almost_equal, DVec3, Point, Ray};

/// Maximum recursion depth for global effects.
pub const MAX_LEVEL: u32 = 10;

/// Importance cutoff: branches whose accumulated coefficient product
/// drops below this in every channel contribute nothing.
pub const MIN_K: f64 = 0.001;

/// Per-channel tolerance for the adaptive sampler's convergence test.
const COLOR_TOLERANCE: f64 = 1e-3;

/// True when every channel of `k` is below `value`.
#[inline]
fn lower_than(k: DVec3, value: f64) -> bool {
    k.x < value && k.y < value && k.z < value
}

/// Mirror `v` about the normal `n`.
#[inline]
fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - n * (2.0 * v.dot(n))
}

/// Shades rays against one read-only scene.
pub struct RayTracer<'a> {
    scene: &'a Scene,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &Scene {
        self.scene
    }

    /// Resolve the color seen along `ray`: the shaded nearest hit, or the
    /// scene background when nothing is hit.
    pub fn trace_ray(&self, ray: &Ray) -> Color {
        match self.find_closest_intersection(ray) {
            Some(hit) => {
                self.scene.ambient.intensity()
                    + self.calc_color(&hit, ray, MAX_LEVEL, DVec3::ONE)
            }
            None => self.scene.background,
        }
    }

    /// Average color over a beam of rays (fixed-grid super-sampling).
    pub fn trace_beam(&self, rays: &[Ray]) -> Color {
        if rays.is_empty() {
            return self.scene.background;
        }
        let sum: Color = rays.iter().map(|ray| self.trace_ray(ray)).sum();
        sum / rays.len() as f64
    }

    /// Nearest hit along `ray`, by point distance from the ray origin.
    fn find_closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'a>> {
        let hits = self.scene.find_intersections(ray)?;
        hits.into_iter().min_by(|a, b| {
            let da = (a.point - ray.origin).length_squared();
            let db = (b.point - ray.origin).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    fn calc_color(&self, hit: &GeoPoint<'a>, ray: &Ray, level: u32, k: DVec3) -> Color {
        let color = self.calc_local_effects(hit, ray, k);
        if level == 1 {
            color
        } else {
            color + self.calc_global_effects(hit, ray, level, k)
        }
    }

    /// Emission plus the diffuse and specular contribution of every
    /// light that reaches the point.
    fn calc_local_effects(&self, hit: &GeoPoint<'a>, ray: &Ray, k: DVec3) -> Color {
        let mut color = hit.geometry.emission();
        let v = ray.direction;
        let normal = hit.geometry.normal_at(hit.point);
        let nv = align_zero(normal.dot(v));
        // Grazing incidence: no local light at this point.
        if nv == 0.0 {
            return color;
        }

        let material = hit.geometry.material();
        for light in self.scene.lights() {
            let l = light.l(hit.point);
            let nl = align_zero(normal.dot(l));
            // Light and viewer must be on the same side of the surface.
            if nl * nv <= 0.0 {
                continue;
            }
            let ktr = self.transparency(hit, light, l, normal);
            if lower_than(ktr * k, MIN_K) {
                continue;
            }
            let intensity = light.intensity_at(hit.point) * ktr;
            let diffuse = material.kd * nl.abs();
            let specular = {
                let reflected = l - normal * (2.0 * nl);
                let cos = align_zero(-v.dot(reflected));
                if cos <= 0.0 {
                    Color::ZERO
                } else {
                    material.ks * cos.powi(material.shininess)
                }
            };
            color += intensity * diffuse + intensity * specular;
        }
        color
    }

    /// Accumulated transparency between the hit point and a light.
    ///
    /// The product of `kt` over every occluder closer than the light;
    /// drops to zero outright once the product falls below the
    /// importance cutoff.
    fn transparency(&self, hit: &GeoPoint<'a>, light: &Light, l: DVec3, normal: DVec3) -> DVec3 {
        let shadow_ray = Ray::new_offset(hit.point, -l, normal);
        let light_distance = light.distance(hit.point);

        let Some(occluders) = self.scene.find_intersections(&shadow_ray) else {
            return DVec3::ONE;
        };
        let mut ktr = DVec3::ONE;
        for occluder in occluders {
            if align_zero(occluder.point.distance(hit.point) - light_distance) <= 0.0 {
                ktr *= occluder.geometry.material().kt;
                if lower_than(ktr, MIN_K) {
                    return DVec3::ZERO;
                }
            }
        }
        ktr
    }

    /// Reflection and refraction branches. Refraction is straight-through
    /// in this model; both branch origins are lifted off the surface.
    fn calc_global_effects(&self, hit: &GeoPoint<'a>, ray: &Ray, level: u32, k: DVec3) -> Color {
        let v = ray.direction;
        let normal = hit.geometry.normal_at(hit.point);
        let material = hit.geometry.material();

        let reflected = Ray::new_offset(hit.point, reflect(v, normal), normal);
        let refracted = Ray::new_offset(hit.point, v, normal);

        self.global_branch(material.kr, k, &reflected, level)
            + self.global_branch(material.kt, k, &refracted, level)
    }

    /// One global branch, pruned when its accumulated importance falls
    /// below the cutoff. A branch ray that escapes the scene contributes
    /// the background color.
    fn global_branch(&self, kx: DVec3, k: DVec3, ray: &Ray, level: u32) -> Color {
        let kkx = kx * k;
        if lower_than(kkx, MIN_K) {
            return Color::ZERO;
        }
        let color = match self.find_closest_intersection(ray) {
            Some(hit) => self.calc_color(&hit, ray, level - 1, kkx),
            None => self.scene.background,
        };
        color * kx
    }

    /// Adaptive anti-aliasing over one pixel cell.
    ///
    /// Samples the cell's four corners (skipping any the parent cell
    /// already sampled), returns early when the sampled colors agree
    /// within tolerance, and otherwise recurses into the four half-size
    /// children, averaging their results. Cells smaller than twice the
    /// minimum fall back to a single centered ray.
    #[allow(clippy::too_many_arguments)]
    pub fn adaptive_sample(
        &self,
        center: Point,
        width: f64,
        height: f64,
        min_width: f64,
        min_height: f64,
        origin: Point,
        v_right: DVec3,
        v_up: DVec3,
        sampled: &[Point],
    ) -> Color {
        if width < min_width * 2.0 || height < min_height * 2.0 {
            return self.trace_ray(&Ray::new(origin, center - origin));
        }

        // Tolerance for recognizing a corner the parent already traced.
        let corner_eps = min_width.min(min_height) * 1e-3;

        let mut corners = Vec::with_capacity(4);
        let mut child_centers = Vec::with_capacity(4);
        let mut colors = Vec::with_capacity(4);
        for i in [-1.0, 1.0] {
            for j in [-1.0, 1.0] {
                let corner = center + v_right * (i * width / 2.0) + v_up * (j * height / 2.0);
                corners.push(corner);
                let seen = sampled
                    .iter()
                    .any(|p| p.distance_squared(corner) < corner_eps * corner_eps);
                if !seen {
                    colors.push(self.trace_ray(&Ray::new(origin, corner - origin)));
                    child_centers
                        .push(center + v_right * (i * width / 4.0) + v_up * (j * height / 4.0));
                }
            }
        }

        if child_centers.is_empty() {
            return Color::ZERO;
        }

        let converged = colors.len() > 1
            && colors
                .iter()
                .all(|c| almost_equal(*c, colors[0], COLOR_TOLERANCE));
        if converged {
            return colors[0];
        }

        let sum: Color = child_centers
            .iter()
            .map(|&child| {
                self.adaptive_sample(
                    child,
                    width / 2.0,
                    height / 2.0,
                    min_width,
                    min_height,
                    origin,
                    v_right,
                    v_up,
                    &corners,
                )
            })
            .sum();
        sum / child_centers.len() as f64
    }
}
