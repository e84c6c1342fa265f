//! Draw list generation for the court
//!
//! Turns a read-only world into an ordered list of 2D primitives. Backends
//! only have to paint them in order.

use glam::Vec2;

use crate::consts::NET_WIDTH;
use crate::sim::{Paddle, World};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const BACKGROUND: &str = "#000";
    pub const NET: &str = "#09fc05";
    pub const PADDLE: &str = "#09fc05";
    pub const BALL: &str = "#fff";
    pub const SCORE: &str = "#fff";
}

/// Score digits font
pub const SCORE_FONT: &str = "60px monospace";

/// A single 2D primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Text {
        pos: Vec2,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

fn paddle_rect(paddle: &Paddle) -> Shape {
    Shape::Rect {
        pos: Vec2::new(paddle.x, paddle.y),
        size: Vec2::new(paddle.width, paddle.height),
        color: colors::PADDLE,
    }
}

fn score_text(x: f32, y: f32, score: u32) -> Shape {
    Shape::Text {
        pos: Vec2::new(x, y),
        text: score.to_string(),
        font: SCORE_FONT,
        color: colors::SCORE,
    }
}

/// Build the frame: background, net, scores, paddles, then ball on top
pub fn scene(world: &World) -> Vec<Shape> {
    let w = world.court.width();
    let h = world.court.height();

    vec![
        Shape::Rect {
            pos: Vec2::ZERO,
            size: Vec2::new(w, h),
            color: colors::BACKGROUND,
        },
        Shape::Rect {
            pos: Vec2::new(w / 2.0 - NET_WIDTH / 2.0, 0.0),
            size: Vec2::new(NET_WIDTH, h),
            color: colors::NET,
        },
        score_text(w / 4.0, h / 2.0, world.user.score),
        score_text(3.0 * w / 4.0, h / 2.0, world.ai.score),
        paddle_rect(&world.user),
        paddle_rect(&world.ai),
        Shape::Circle {
            center: world.ball.pos,
            radius: world.ball.radius,
            color: colors::BALL,
        },
    ]
}
