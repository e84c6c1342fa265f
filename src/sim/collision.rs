//! Ball versus paddle collision and rebound response
//!
//! Both shapes are treated as axis-aligned boxes. The rebound direction is a
//! three-way choice (straight, 45° up, 45° down) keyed on which half of the
//! paddle the ball center is in, not a continuous mapping.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::REBOUND_ANGLE;

/// Result of a paddle collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Paddle that was struck
    pub side: Side,
    /// Launch angle in radians (0, -45° or +45°, y grows downward)
    pub angle: f32,
}

/// Which paddle can be hit given the ball's half of the court
#[inline]
pub fn candidate_side(ball_x: f32, center_x: f32) -> Side {
    if ball_x < center_x { Side::User } else { Side::Ai }
}

/// Discrete rebound angle for a ball at `ball_y` striking a paddle
pub fn rebound_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let center = paddle.center_y();
    if ball_y < center {
        -REBOUND_ANGLE
    } else if ball_y > center {
        REBOUND_ANGLE
    } else {
        0.0
    }
}

/// Check the ball against one paddle
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle, side: Side) -> Option<PaddleContact> {
    if !ball.bounds().overlaps(&paddle.bounds()) {
        return None;
    }
    Some(PaddleContact {
        side,
        angle: rebound_angle(ball.pos.y, paddle),
    })
}

/// New velocity after a paddle hit at the ball's current speed
#[inline]
pub fn rebound_velocity(contact: &PaddleContact, speed: f32) -> Vec2 {
    Vec2::new(
        contact.side.rebound_direction() * speed * contact.angle.cos(),
        speed * contact.angle.sin(),
    )
}
