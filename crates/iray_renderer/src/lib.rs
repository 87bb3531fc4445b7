//! IRAY renderer - recursive ray tracing of implicit surfaces.
//!
//! For every pixel the camera produces one or more rays; each ray is
//! intersected against every object in the scene (a plain linear scan),
//! shaded with the Phong model under every light, and followed recursively
//! through mirror reflection and dielectric refraction.

mod bucket;
mod camera;
mod framebuffer;
mod hit;
mod light;
mod scene;
mod shape;
mod tracer;
mod visible;

pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use framebuffer::{color_to_rgb, FrameBuffer, CLEAR_DEPTH};
pub use hit::{HitRecord, RayStatus, NO_HIT};
pub use light::{ambient_color, total_color, Attenuation, Light, PositionalLight, SpotLight};
pub use scene::Scene;
pub use shape::{
    ClosedCylinderY, ConeY, CylinderY, Disk, ImplicitShape, Plane, QuadricParameters, QuadricSurface, Shape,
    Sphere, SurfaceHit, Triangle,
};
pub use tracer::{fresnel, RayTracer, REFLECTION_WEIGHT, SECONDARY_MISS_SCALE, TEXTURE_AMBIENT_FRACTION};
pub use visible::{find_intersection, VisibleShape};

/// Re-export the math types used throughout the renderer
pub use iray_math::{DVec3, Frame, Interval, Ray};
