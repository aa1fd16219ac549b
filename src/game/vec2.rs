use std::ops::{Add, AddAssign, Mul, Sub};

/// A pair of `f64` coordinates.  Used both for positions on the playfield
/// and for unit heading vectors; plain value type with no identity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Vec2 {
    pub(crate) const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Rotate by `angle` radians
    pub(crate) fn rotated(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Euclidean length
    pub(crate) fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-12, "{a:?} != {b:?}");
    }

    #[rstest]
    #[case(Vec2::new(1.0, 0.0), FRAC_PI_2, Vec2::new(0.0, 1.0))]
    #[case(Vec2::new(1.0, 0.0), -FRAC_PI_2, Vec2::new(0.0, -1.0))]
    #[case(Vec2::new(0.0, -1.0), FRAC_PI_2, Vec2::new(1.0, 0.0))]
    #[case(Vec2::new(3.0, 4.0), 0.0, Vec2::new(3.0, 4.0))]
    fn test_rotated(#[case] v: Vec2, #[case] angle: f64, #[case] expected: Vec2) {
        assert_close(v.rotated(angle), expected);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.rotated(0.7).length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 5.0);
        assert_close(a + b, Vec2::new(-2.0, 7.0));
        assert_close(a - b, Vec2::new(4.0, -3.0));
        assert_close(a * 2.5, Vec2::new(2.5, 5.0));
        let mut c = a;
        c += b;
        assert_close(c, a + b);
    }
}
