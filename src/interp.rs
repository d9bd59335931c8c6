use crate::types::{ISO_EPSILON, ISO_LEVEL, Point, Value};

// Linear interpolation
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}

/// Iso-surface crossing point on the edge between two cube corners.
///
/// Tie-break branches are ordered by priority and the first match wins —
/// near the threshold the conditions overlap, and evaluating them in any
/// other order makes the division below unstable:
///
/// 1. `val_a` is on the iso-level → snap to `corner_a`.
/// 2. `val_b` is on the iso-level → snap to `corner_b`.
/// 3. flat edge (`val_a ≈ val_b`) → snap to `corner_a`.
/// 4. otherwise interpolate at `mu = (0.5 - val_a) / (val_b - val_a)`.
#[inline]
pub fn vertex_interp(val_a: Value, val_b: Value, corner_a: Point, corner_b: Point) -> Point {
    if (ISO_LEVEL - val_a).abs() < ISO_EPSILON {
        return corner_a;
    }
    if (ISO_LEVEL - val_b).abs() < ISO_EPSILON {
        return corner_b;
    }
    if (val_a - val_b).abs() < ISO_EPSILON {
        return corner_a;
    }

    let mu = (ISO_LEVEL - val_a) / (val_b - val_a);
    Point::new(
        lerp(corner_a.x, corner_b.x, mu),
        lerp(corner_a.y, corner_b.y, mu),
        lerp(corner_a.z, corner_b.z, mu),
    )
}
