use super::vec2::Vec2;
use crate::config::Field;
use crate::consts;
use rand::Rng;

/// The consumable target: a circle whose radius pulses between
/// [`FEED_MIN_RADIUS`][consts::FEED_MIN_RADIUS] and
/// [`FEED_MAX_RADIUS`][consts::FEED_MAX_RADIUS].  One instance is live at a
/// time; eating it replaces it with a fresh one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Feed {
    position: Vec2,
    radius: f64,
    radius_delta: f64,
}

impl Feed {
    pub(crate) fn new(position: Vec2) -> Feed {
        Feed {
            position,
            radius: consts::FEED_START_RADIUS,
            radius_delta: consts::FEED_RADIUS_DELTA,
        }
    }

    /// Create a feed at a random position at least
    /// [`FEED_MARGIN`][consts::FEED_MARGIN] units from every playfield edge
    pub(crate) fn spawn<R: Rng>(rng: &mut R, field: Field) -> Feed {
        let x = rng.random_range(consts::FEED_MARGIN..field.width - consts::FEED_MARGIN);
        let y = rng.random_range(consts::FEED_MARGIN..field.height - consts::FEED_MARGIN);
        Feed::new(Vec2::new(x, y))
    }

    pub(crate) fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn radius(&self) -> f64 {
        self.radius
    }

    /// Advance the radius pulse by one tick.  The step direction reverses
    /// whenever a bound is reached or passed; the reversal may overshoot the
    /// bound by a fraction of a step, which is accepted rather than clamped.
    pub(crate) fn animate(&mut self) {
        self.radius += self.radius_delta;
        if self.radius <= consts::FEED_MIN_RADIUS || self.radius >= consts::FEED_MAX_RADIUS {
            self.radius_delta = -self.radius_delta;
        }
    }
}
