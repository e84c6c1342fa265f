//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta time
//! - Events returned as data, never played or displayed here
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{PaddleContact, ball_paddle_collision, rebound_angle};
pub use state::{Ball, InputState, Paddle, Rect, Side, World};
pub use tick::{TickEvent, step};
