//! Rendering engine for the glint ray tracer.
//!
//! [`RayTracer`] shades rays against a scene with recursive reflection
//! and refraction; [`Camera`] shoots rays through a view plane and
//! drives the sequential or multi-threaded render loop; [`Framebuffer`]
//! holds the result and writes PNG output.

mod camera;
mod dispenser;
mod framebuffer;
mod tracer;

pub use camera::{Camera, CameraBuilder, CameraError, Sampling, ThreadCount};
pub use dispenser::PixelDispenser;
pub use framebuffer::Framebuffer;
pub use tracer::{RayTracer, MAX_LEVEL, MIN_K};
