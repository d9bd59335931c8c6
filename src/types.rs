use nalgebra::{Point3, Vector3};

/// Scalar field value at a point in space.
pub type Value = f32;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// Iso-level separating "inside" from "outside" samples.
///
/// A corner is inside the surface when its value is **strictly greater** than this.
pub const ISO_LEVEL: Value = 0.5;

/// Tolerance used when deciding whether an iso-crossing sits on a corner or
/// along a flat edge. Assumes single-precision inputs.
pub const ISO_EPSILON: Value = 1e-5;
