//! Game state and core simulation types
//!
//! Everything the renderer draws lives here; only the simulation step mutates it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Court;
use crate::consts::*;

/// Which player a paddle, point or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Keyboard-controlled paddle on the left
    User,
    /// AI-controlled paddle on the right
    Ai,
}

impl Side {
    /// Horizontal direction a ball travels after bouncing off this side's paddle
    #[inline]
    pub fn rebound_direction(self) -> f32 {
        match self {
            Side::User => 1.0,
            Side::Ai => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::User => "user",
            Side::Ai => "ai",
        }
    }
}

/// Axis-aligned box used for paddle collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Strict overlap: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}

/// A paddle. `x` never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle for the given side, vertically centered on the court
    pub fn new(side: Side, court: &Court) -> Self {
        let x = match side {
            Side::User => PADDLE_INSET,
            Side::Ai => court.width() - (PADDLE_WIDTH + PADDLE_INSET),
        };
        Self {
            x,
            y: court.center_y() - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            score: 0,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            left: self.x,
            top: self.y,
            right: self.x + self.width,
            bottom: self.y + self.height,
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed used for the next paddle rebound
    pub speed: f32,
}

impl Ball {
    /// Opening serve: centered, moving down-right
    pub fn new(court: &Court) -> Self {
        Self {
            pos: Vec2::new(court.center_x(), court.center_y()),
            vel: Vec2::new(BALL_START_VELOCITY.0, BALL_START_VELOCITY.1),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            left: self.left(),
            top: self.top(),
            right: self.right(),
            bottom: self.bottom(),
        }
    }

    /// Re-serve after a point: back to center, reversed, at reset speed
    pub fn reset(&mut self, court: &Court) {
        self.pos = Vec2::new(court.center_x(), court.center_y());
        self.speed = BALL_RESET_SPEED;
        self.vel = -self.vel;
    }
}

/// Held-key flags, written by key callbacks and read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub court: Court,
    pub user: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    pub fn new(court: Court) -> Self {
        Self {
            court,
            user: Paddle::new(Side::User, &court),
            ai: Paddle::new(Side::Ai, &court),
            ball: Ball::new(&court),
            time_ticks: 0,
        }
    }

    /// Reinitialize in place (scores cleared, opening serve)
    pub fn reset(&mut self) {
        *self = Self::new(self.court);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::User => &self.user,
            Side::Ai => &self.ai,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::User => &mut self.user,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.paddle(side).score
    }

    /// Whether either player has scored yet
    pub fn any_points(&self) -> bool {
        self.user.score > 0 || self.ai.score > 0
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Court::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_world() {
        let world = World::default();
        assert_eq!(world.user.x, 10.0);
        assert_eq!(world.ai.x, 582.0);
        assert_eq!(world.user.y, 155.0);
        assert_eq!(world.ai.y, 155.0);
        assert_eq!(world.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(world.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(world.ball.speed, 10.0);
        assert!(!world.any_points());
    }

    #[test]
    fn test_ball_reset_negates_velocity() {
        let court = Court::default();
        let mut ball = Ball::new(&court);
        ball.pos = Vec2::new(12.0, 34.0);
        ball.vel = Vec2::new(-3.0, 8.0);
        ball.speed = 13.4;
        ball.reset(&court);
        assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(3.0, -8.0));
        assert_eq!(ball.speed, BALL_RESET_SPEED);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect {
            left: 0.0,
            top: 0.0,
            right: 10.0,
            bottom: 10.0,
        };
        let touching = Rect {
            left: 10.0,
            top: 0.0,
            right: 20.0,
            bottom: 10.0,
        };
        let inside = Rect {
            left: 9.0,
            top: 9.0,
            right: 20.0,
            bottom: 20.0,
        };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_world_reset_clears_scores() {
        let mut world = World::default();
        world.user.score = 7;
        world.ai.score = 20;
        world.ball.speed = 30.0;
        world.time_ticks = 99;
        world.reset();
        assert_eq!(world, World::default());
    }
}
