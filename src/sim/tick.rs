//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by one frame. The step is pure
//! arithmetic on the world: side effects (sound, status text, restarts) are
//! left to whoever consumes the returned events.

use super::collision::{ball_paddle_collision, candidate_side, rebound_velocity};
use super::state::{InputState, Side, World};
use crate::consts::*;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TickEvent {
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Side scored a point
    Score(Side),
    /// Side reached the winning score
    GameOver(Side),
    /// Ball struck this side's paddle
    PaddleHit(Side),
}

/// Advance the world by one tick, returning the events in the order they fired
pub fn step(world: &mut World, input: &InputState) -> Vec<TickEvent> {
    let mut events = Vec::new();
    let court = world.court;
    world.time_ticks += 1;

    // User paddle: one direction per tick, up wins when both are held
    let max_y = court.paddle_max_y();
    let user = &mut world.user;
    if input.up && user.y > 0.0 {
        user.y = (user.y - PADDLE_STEP).max(0.0);
    } else if input.down && user.y < max_y {
        user.y = (user.y + PADDLE_STEP).min(max_y);
    }

    // Top and bottom walls. Position is left alone, a brief overlap is fine.
    let ball = &mut world.ball;
    if ball.bottom() >= court.height() || ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(TickEvent::WallBounce);
    }

    // Side walls are checked independently; a fast enough ball could trigger both
    if world.ball.right() >= court.width() {
        award_point(world, Side::User, &mut events);
    }
    if world.ball.left() <= 0.0 {
        award_point(world, Side::Ai, &mut events);
    }

    let ball = &mut world.ball;
    ball.pos += ball.vel;

    track_ball(world);

    let side = candidate_side(world.ball.pos.x, court.center_x());
    if let Some(contact) = ball_paddle_collision(&world.ball, world.paddle(side), side) {
        events.push(TickEvent::PaddleHit(side));
        let ball = &mut world.ball;
        ball.vel = rebound_velocity(&contact, ball.speed);
        ball.speed += BALL_SPEED_INCREMENT;
    }

    events
}

/// Credit a point, flag a win, and re-serve from the center
fn award_point(world: &mut World, side: Side, events: &mut Vec<TickEvent>) {
    let paddle = world.paddle_mut(side);
    paddle.score += 1;
    let score = paddle.score;
    events.push(TickEvent::Score(side));
    if score == WIN_SCORE {
        events.push(TickEvent::GameOver(side));
    }
    let court = world.court;
    world.ball.reset(&court);
}

/// AI paddle closes a fixed fraction of the gap between its center and the ball
fn track_ball(world: &mut World) {
    let ai = &mut world.ai;
    let error = world.ball.pos.y - ai.center_y();
    ai.y = (ai.y + error * AI_PURSUIT_GAIN).clamp(0.0, world.court.paddle_max_y());
}
