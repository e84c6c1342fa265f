//! Status line shown under the court
//!
//! Reacts to simulation events with the short messages players see between
//! rallies, plus the end-of-match dialog text.

use crate::sim::{Side, TickEvent, World};

pub const USER_POINT: &str = "Player Point! :D";
pub const AI_POINT: &str = "AI Point! :O";
pub const RALLY: &str = "Ping Pong!";
pub const USER_WINS: &str = "You win! Click OK to play again.";
pub const AI_WINS: &str = "You lose! Click OK to play again.";

/// Current status text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcer {
    status: String,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Apply one tick's events. Returns true if the status text changed.
    ///
    /// `world` is the state after the tick, so a rally message only shows once
    /// someone is on the board.
    pub fn observe(&mut self, events: &[TickEvent], world: &World) -> bool {
        let mut changed = false;
        for event in events {
            let text = match event {
                TickEvent::Score(Side::User) => USER_POINT,
                TickEvent::Score(Side::Ai) => AI_POINT,
                TickEvent::PaddleHit(_) if world.any_points() => RALLY,
                _ => continue,
            };
            if self.status != text {
                self.status.clear();
                self.status.push_str(text);
                changed = true;
            }
        }
        changed
    }

    /// End-of-match message for the winner
    pub fn verdict(winner: Side) -> &'static str {
        match winner {
            Side::User => USER_WINS,
            Side::Ai => AI_WINS,
        }
    }

    pub fn clear(&mut self) {
        self.status.clear();
    }
}
