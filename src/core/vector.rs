use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A plain 2D vector used for pixel-space arithmetic.
///
/// All operations return a new value and leave their operands untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Elementwise absolute difference between two vectors
    pub fn span_to(&self, other: &Vector2) -> Vector2 {
        Vector2::new((other.x - self.x).abs(), (other.y - self.y).abs())
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    /// A zero divisor is not guarded and yields infinity or NaN components.
    fn div(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(1.0, -2.0);

        assert_eq!(a + b, Vector2::new(4.0, 2.0));
        assert_eq!(a - b, Vector2::new(2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(6.0, 8.0));
        assert_eq!(a / 2.0, Vector2::new(1.5, 2.0));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Vector2::new(3.0, 4.0);
        let _ = a * 10.0;
        assert_eq!(a, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_span_to_is_absolute() {
        let a = Vector2::new(10.0, -5.0);
        let b = Vector2::new(2.0, 5.0);

        assert_eq!(a.span_to(&b), Vector2::new(8.0, 10.0));
        assert_eq!(b.span_to(&a), a.span_to(&b));
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let v = Vector2::new(1.0, 0.0) / 0.0;
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }
}
