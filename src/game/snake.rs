use super::feed::Feed;
use super::geometry;
use super::vec2::Vec2;
use crate::config::Field;
use crate::consts;
use ratatui::style::Color;
use std::collections::VecDeque;

/// How the snake is steered on a given tick.  This is a per-tick choice, not
/// stored state; every tick picks exactly one of the three motions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Turn {
    #[default]
    Straight,
    Left,
    Right,
}

/// The four motion parameters, derived purely from the current score
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Kinematics {
    /// Forward speed in units per tick
    pub(crate) speed: f64,
    /// Radius of the turning circle
    pub(crate) rotate_radius: f64,
    /// Heading change per turning tick, in radians
    pub(crate) rotate_angle: f64,
    /// Radius shared by every body segment
    pub(crate) segment_radius: f64,
}

impl Kinematics {
    /// Recompute the motion parameters for `score`.  Each parameter has a
    /// floor so that the early game stays playable; the divisors are tuned
    /// gameplay values.
    pub(crate) fn derive(score: u32) -> Kinematics {
        let score = f64::from(score);
        let speed = (score / consts::SPEED_SCORE_DIVISOR).max(consts::MIN_SPEED);
        let rotate_radius = score.max(consts::MIN_ROTATE_RADIUS);
        Kinematics {
            speed,
            rotate_radius,
            rotate_angle: speed / rotate_radius,
            segment_radius: (score / consts::SEGMENT_RADIUS_SCORE_DIVISOR)
                .max(consts::MIN_SEGMENT_RADIUS),
        }
    }
}

/// Snake state.
///
/// The body is a delay line over the head's position history: each tick the
/// newly wrapped head position is pushed at the front and the tail position
/// is dropped, so segment `i` occupies the position segment `i - 1` held one
/// tick earlier.  Turns therefore bunch and spread the trailing segments
/// visually; that is the intended look, not a defect.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snake {
    /// The wrapped position of the snake's head; always equal to the front
    /// of `body`
    pub(super) head: Vec2,

    /// Unit heading vector
    pub(super) direction: Vec2,

    /// The positions of all of the segments in the snake's body, head first
    pub(super) body: VecDeque<Vec2>,

    /// Number of feeds eaten since the last restart
    pub(super) score: u32,

    /// Derived motion parameters, recomputed whenever `score` changes
    pub(super) kinematics: Kinematics,
}

impl Snake {
    /// Create a snake with a single segment at the center of `field`,
    /// heading up
    pub(crate) fn new(field: Field) -> Snake {
        let head = Vec2::new(field.width / 2.0, field.height / 2.0);
        Snake {
            head,
            direction: Vec2::new(0.0, -1.0),
            body: VecDeque::from([head]),
            score: 0,
            kinematics: Kinematics::derive(0),
        }
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn segments_count(&self) -> usize {
        self.body.len()
    }

    /// Render data, one entry per segment, head first.  Draw in reverse
    /// order so the head lands on top of the segments trailing it.
    pub(crate) fn segments(&self) -> impl DoubleEndedIterator<Item = (Vec2, f64, Color)> + '_ {
        let radius = self.kinematics.segment_radius;
        self.body.iter().enumerate().map(move |(i, &pos)| {
            let color = if i % 2 == 0 {
                consts::SNAKE_PRIMARY_COLOR
            } else {
                consts::SNAKE_ACCENT_COLOR
            };
            (pos, radius, color)
        })
    }

    /// Advance the snake one tick: move the head straight or along an arc,
    /// wrap it into the playfield, and propagate the body by one position.
    pub(crate) fn tick(&mut self, turn: Turn, field: Field) {
        match turn {
            Turn::Straight => self.head += self.direction * self.kinematics.speed,
            Turn::Right => self.arc_step(self.kinematics.rotate_angle),
            Turn::Left => self.arc_step(-self.kinematics.rotate_angle),
        }
        self.head = geometry::wrap(self.head, field);
        self.body.push_front(self.head);
        let _ = self.body.pop_back();
    }

    /// Move the head along the chord of a circular arc while rotating the
    /// heading by `angle` radians (positive turns right), pivoting about the
    /// point `rotate_radius` units to the turning side.  Rotation and
    /// translation are derived from the same pivot, so successive turning
    /// ticks trace an exact circle rather than a drifting approximation.
    fn arc_step(&mut self, angle: f64) {
        let radius = self.kinematics.rotate_radius;
        // Unit vector from the head toward the pivot point
        let pivot = Vec2::new(-self.direction.y, self.direction.x) * angle.signum();
        self.head += (pivot - pivot.rotated(angle)) * radius;
        self.direction = self.direction.rotated(angle);
    }

    /// Append one segment at the current tail position
    pub(crate) fn add_segment(&mut self) {
        let tail = *self.body.back().expect("snake body should never be empty");
        self.body.push_back(tail);
    }

    /// Record one eaten feed: bump the score and re-derive the kinematics,
    /// which resizes every segment at once
    pub(crate) fn add_point(&mut self) {
        self.score += 1;
        self.kinematics = Kinematics::derive(self.score);
    }

    /// True iff the feed's circle overlaps the head segment's circle
    pub(crate) fn check_for_eating(&self, feed: &Feed) -> bool {
        geometry::intersects(
            self.head,
            self.kinematics.segment_radius,
            feed.position(),
            feed.radius(),
        )
    }

    /// True iff the head overlaps any segment from
    /// [`SELF_COLLISION_START`][consts::SELF_COLLISION_START] onward.
    /// Segments closer to the head are exempt; see the constant's docs.
    pub(crate) fn check_self_collision(&self) -> bool {
        let radius = self.kinematics.segment_radius;
        self.body
            .iter()
            .skip(consts::SELF_COLLISION_START)
            .any(|&segment| geometry::intersects(self.head, radius, segment, radius))
    }

    /// Reset to the score-0 baseline, dropping every segment but the head.
    /// Position and heading are kept; the snake instance persists across
    /// restarts.
    pub(crate) fn restart(&mut self) {
        self.score = 0;
        self.kinematics = Kinematics::derive(0);
        self.body.truncate(1);
    }
}
