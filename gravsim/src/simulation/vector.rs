//! 2D vector type used throughout the simulation
//!
//! `NVec2` is nalgebra's `Vector2<f64>`: arithmetic (`+`, `-`, `* k`, `/ k`),
//! `dot`, `norm` and `normalize`, plus the in-place `+=`/`*=` forms, come from
//! nalgebra directly. [`Vector2Ext`] adds the handful of primitives the
//! physics and the viewer need on top of that.

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

pub trait Vector2Ext {
    /// Unit vector in the same direction, or the zero vector when `self` has
    /// zero length. `normalize()` would divide by zero and yield NaN.
    fn normalized_or_zero(&self) -> Self;

    /// Same direction, new length. Zero stays zero.
    fn with_magnitude(&self, magnitude: f64) -> Self;

    /// Rotated 90 degrees counter-clockwise: `(-y, x)`
    fn perpendicular(&self) -> Self;

    /// Mirrored across the x axis: `(x, -y)`
    fn flip_y(&self) -> Self;

    /// Each component clamped into `[min, max]`
    fn clamp_components(&self, min: f64, max: f64) -> Self;
}

impl Vector2Ext for NVec2 {
    fn normalized_or_zero(&self) -> Self {
        self.try_normalize(0.0).unwrap_or_else(NVec2::zeros)
    }

    fn with_magnitude(&self, magnitude: f64) -> Self {
        self.normalized_or_zero() * magnitude
    }

    fn perpendicular(&self) -> Self {
        NVec2::new(-self.y, self.x)
    }

    fn flip_y(&self) -> Self {
        NVec2::new(self.x, -self.y)
    }

    fn clamp_components(&self, min: f64, max: f64) -> Self {
        // min/max rather than f64::clamp, which panics on min > max
        self.map(|c| c.min(max).max(min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_or_zero_guards_zero_length() {
        assert_eq!(NVec2::zeros().normalized_or_zero(), NVec2::zeros());

        let unit = NVec2::new(3.0, 4.0).normalized_or_zero();
        assert!((unit.norm() - 1.0).abs() < 1e-12);
        assert!((unit.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn plain_normalize_of_zero_is_nan() {
        let n = NVec2::zeros().normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn perpendicular_and_flip() {
        let v = NVec2::new(1.0, 2.0);
        assert_eq!(v.perpendicular(), NVec2::new(-2.0, 1.0));
        assert_eq!(v.perpendicular().dot(&v), 0.0);
        assert_eq!(v.flip_y(), NVec2::new(1.0, -2.0));
    }

    #[test]
    fn clamp_is_component_wise() {
        let v = NVec2::new(-5.0, 0.5);
        assert_eq!(v.clamp_components(-1.0, 1.0), NVec2::new(-1.0, 0.5));
    }

    #[test]
    fn with_magnitude_rescales() {
        let v = NVec2::new(0.0, 2.0).with_magnitude(5.0);
        assert_eq!(v, NVec2::new(0.0, 5.0));
    }

    #[test]
    fn in_place_ops() {
        let mut v = NVec2::repeat(2.0);
        v += NVec2::new(1.0, -1.0);
        v *= 2.0;
        assert_eq!(v, NVec2::new(6.0, 2.0));
    }
}
