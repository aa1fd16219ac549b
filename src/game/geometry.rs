use super::vec2::Vec2;
use crate::config::Field;

/// Closed-disk overlap test: true iff the distance between the two centers
/// is no greater than the sum of the radii.  Circles that merely touch count
/// as intersecting.
pub(crate) fn intersects(a: Vec2, radius_a: f64, b: Vec2, radius_b: f64) -> bool {
    (a - b).length() <= radius_a + radius_b
}

/// Map `pos` onto the torus, into `[0, width) × [0, height)`.  Handles
/// displacements of any size, not just a single playfield width.
pub(crate) fn wrap(pos: Vec2, field: Field) -> Vec2 {
    Vec2 {
        x: pos.x.rem_euclid(field.width),
        y: pos.y.rem_euclid(field.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(0.0, 0.0), 5.0, Vec2::new(8.0, 0.0), 3.0, true)] // touching
    #[case(Vec2::new(0.0, 0.0), 5.0, Vec2::new(8.1, 0.0), 3.0, false)]
    #[case(Vec2::new(0.0, 0.0), 5.0, Vec2::new(1.0, 1.0), 3.0, true)] // contained
    #[case(Vec2::new(10.0, 10.0), 2.0, Vec2::new(13.0, 14.0), 2.9, false)]
    #[case(Vec2::new(10.0, 10.0), 2.0, Vec2::new(13.0, 14.0), 3.0, true)]
    fn test_intersects(
        #[case] a: Vec2,
        #[case] radius_a: f64,
        #[case] b: Vec2,
        #[case] radius_b: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(intersects(a, radius_a, b, radius_b), expected);
        assert_eq!(intersects(b, radius_b, a, radius_a), expected);
    }

    #[rstest]
    #[case(Vec2::new(100.0, 200.0), Vec2::new(100.0, 200.0))] // already inside
    #[case(Vec2::new(-1.0, 0.0), Vec2::new(799.0, 0.0))]
    #[case(Vec2::new(800.0, 800.0), Vec2::new(0.0, 0.0))]
    #[case(Vec2::new(801.5, -0.5), Vec2::new(1.5, 799.5))]
    #[case(Vec2::new(-1700.0, 2450.0), Vec2::new(700.0, 50.0))] // several fields out
    fn test_wrap(#[case] pos: Vec2, #[case] expected: Vec2) {
        let field = Field::default();
        let wrapped = wrap(pos, field);
        assert!((wrapped - expected).length() < 1e-9, "{wrapped:?}");
        assert!((0.0..field.width).contains(&wrapped.x));
        assert!((0.0..field.height).contains(&wrapped.y));
    }
}
