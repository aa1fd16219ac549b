mod feed;
mod geometry;
mod snake;
mod vec2;
use self::feed::Feed;
use self::snake::{Snake, Turn};
use self::vec2::Vec2;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Field;
use crate::consts;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{
        canvas::{Canvas, Circle},
        Block, Widget,
    },
    Frame,
};
use std::io;
use std::time::Instant;

/// The per-tick steering snapshot: which steering keys were seen since the
/// last tick.  Terminals do not deliver key-release events, so "held" is
/// approximated by accumulating press & repeat events between ticks and
/// clearing the snapshot once it is consumed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct TurnInput {
    left: bool,
    right: bool,
}

impl TurnInput {
    /// Resolve and clear the snapshot.  Right is checked before left, so
    /// pressing both in the same tick steers right.
    fn take(&mut self) -> Turn {
        let turn = if self.right {
            Turn::Right
        } else if self.left {
            Turn::Left
        } else {
            Turn::Straight
        };
        *self = TurnInput::default();
        turn
    }
}

/// One running game: a snake, the live feed, and the fixed-tick loop that
/// binds them together
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    field: Field,
    snake: Snake,
    feed: Feed,
    input: TurnInput,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(field: Field) -> Self {
        Game::new_with_rng(field, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(field: Field, rng: R) -> Game<R> {
        Game {
            rng,
            field,
            snake: Snake::new(field),
            // the first feed sits a quarter of the way down the field
            feed: Feed::new(Vec2::new(field.width / 2.0, field.height / 4.0)),
            input: TurnInput::default(),
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.advance();
            self.next_tick = None;
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one simulation tick: steer & move the snake, resolve eating and
    /// self-collision, then pulse the feed.
    fn advance(&mut self) {
        let turn = self.input.take();
        self.snake.tick(turn, self.field);
        if self.snake.check_for_eating(&self.feed) {
            self.feed = Feed::spawn(&mut self.rng, self.field);
            self.snake.add_point();
            self.snake.add_segment();
        }
        if self.snake.check_self_collision() {
            // dying is a reset, not a game over
            self.snake.restart();
        }
        self.feed.animate();
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => Some(Screen::Quit),
            Command::Left => {
                self.input.left = true;
                None
            }
            Command::Right => {
                self.input.right = true;
                None
            }
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        Line::styled(format!(" Score: {}", self.snake.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        let height = self.field.height;
        Canvas::default()
            .block(Block::bordered())
            .x_bounds([0.0, self.field.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                // The canvas y axis points up while the simulation's points
                // down, hence the flip.  Feed first, then the body tail to
                // head, so the head is always drawn on top.
                ctx.draw(&Circle {
                    x: self.feed.position().x,
                    y: height - self.feed.position().y,
                    radius: self.feed.radius(),
                    color: consts::FEED_COLOR,
                });
                for (pos, radius, color) in self.snake.segments().rev() {
                    ctx.draw(&Circle {
                        x: pos.x,
                        y: height - pos.y,
                        radius,
                        color,
                    });
                }
            })
            .render(field_area, buf);
    }
}
