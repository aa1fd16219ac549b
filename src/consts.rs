//! Assorted constants & hard-coded configuration
//!
//! The gameplay numbers in here are tuned values, not derived ones; resist
//! the urge to compute them from one another.
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Time between simulation ticks (60 ticks per second)
pub(crate) const TICK_PERIOD: Duration = Duration::from_micros(16_667);

/// Radius of a freshly spawned feed
pub(crate) const FEED_START_RADIUS: f64 = 12.0;

/// Lower bound of the feed's radius pulse
pub(crate) const FEED_MIN_RADIUS: f64 = 10.0;

/// Upper bound of the feed's radius pulse
pub(crate) const FEED_MAX_RADIUS: f64 = 15.0;

/// How much the feed's radius changes per tick
pub(crate) const FEED_RADIUS_DELTA: f64 = 0.1;

/// Minimum distance between a spawned feed and every playfield edge
pub(crate) const FEED_MARGIN: f64 = 20.0;

/// Index of the first body segment the head can collide with.  Segments 1
/// through `SELF_COLLISION_START - 1` always overlap the head when the snake
/// turns at its minimum rotation radius, so they are exempt.
pub(crate) const SELF_COLLISION_START: usize = 13;

/// Forward speed floor, in units per tick
pub(crate) const MIN_SPEED: f64 = 2.0;

/// Score points per extra unit of speed
pub(crate) const SPEED_SCORE_DIVISOR: f64 = 10.0;

/// Turning-circle radius floor, in units
pub(crate) const MIN_ROTATE_RADIUS: f64 = 20.0;

/// Body segment radius floor, in units
pub(crate) const MIN_SEGMENT_RADIUS: f64 = 10.0;

/// Score points per extra unit of segment radius
pub(crate) const SEGMENT_RADIUS_SCORE_DIVISOR: f64 = 3.5;

/// Color of even-indexed body segments, the head included
pub(crate) const SNAKE_PRIMARY_COLOR: Color = Color::White;

/// Color of odd-indexed body segments
pub(crate) const SNAKE_ACCENT_COLOR: Color = Color::Red;

/// Color of the feed circle
pub(crate) const FEED_COLOR: Color = Color::Red;

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
