//! Small numeric helpers shared by the geometry and the physics code.
use nalgebra::Vector2;

#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Rotate a 2D vector by 90° counter-clockwise.
#[must_use]
pub fn rotate_ccw(v: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}
