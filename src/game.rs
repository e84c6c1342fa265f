//! Match driver
//!
//! Owns the world and the held-key flags, runs the simulation step at a fixed
//! rate from variable frame times, and restarts the match when someone wins.

use serde::Serialize;

use crate::config::Court;
use crate::consts::*;
use crate::input::{Key, Taunt};
use crate::sim::{InputState, Side, TickEvent, World, step};

/// Running totals across restarts (not persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub user_wins: u32,
    pub ai_wins: u32,
    pub paddle_hits: u64,
    pub wall_bounces: u64,
}

/// How a finished match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub winner: Side,
    pub user_score: u32,
    pub ai_score: u32,
}

/// A match in progress
#[derive(Debug, Clone)]
pub struct Match {
    world: World,
    input: InputState,
    accumulator: f32,
    stats: MatchStats,
    last_result: Option<MatchResult>,
}

impl Match {
    pub fn new(court: Court) -> Self {
        log::info!("New match on {}x{} court", court.width(), court.height());
        Self {
            world: World::new(court),
            input: InputState::default(),
            accumulator: 0.0,
            stats: MatchStats::default(),
            last_result: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Outcome of the most recently finished match
    pub fn last_result(&self) -> Option<MatchResult> {
        self.last_result
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) -> Option<Taunt> {
        self.input.key_up(key)
    }

    /// Replace the held-key flags wholesale (autopilot)
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Run exactly one simulation step
    pub fn tick(&mut self) -> Vec<TickEvent> {
        let events = step(&mut self.world, &self.input);
        self.record(&events);
        events
    }

    /// Run as many fixed steps as `frame_dt` seconds cover
    pub fn advance(&mut self, frame_dt: f32) -> Vec<TickEvent> {
        let dt = frame_dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            // Consume the step first: a win inside `tick` restarts and zeroes the accumulator
            self.accumulator -= SIM_DT;
            events.extend(self.tick());
            substeps += 1;
        }
        // Drop time we could not catch up on rather than bursting later
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        events
    }

    /// Start over with fresh scores, keeping the lifetime stats
    pub fn restart(&mut self) {
        self.world.reset();
        self.input.clear();
        self.accumulator = 0.0;
    }

    fn record(&mut self, events: &[TickEvent]) {
        let mut winner = None;
        for event in events {
            match *event {
                TickEvent::WallBounce => self.stats.wall_bounces += 1,
                TickEvent::PaddleHit(_) => self.stats.paddle_hits += 1,
                TickEvent::Score(side) => log::debug!(
                    "{} scores ({} - {})",
                    side.as_str(),
                    self.world.user.score,
                    self.world.ai.score
                ),
                TickEvent::GameOver(side) => winner = Some(side),
            }
        }

        if let Some(side) = winner {
            match side {
                Side::User => self.stats.user_wins += 1,
                Side::Ai => self.stats.ai_wins += 1,
            }
            log::info!(
                "Game over, {} wins {} - {}",
                side.as_str(),
                self.world.user.score,
                self.world.ai.score
            );
            self.last_result = Some(MatchResult {
                winner: side,
                user_score: self.world.user.score,
                ai_score: self.world.ai.score,
            });
            self.restart();
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Court::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_advance_runs_fixed_steps() {
        let mut game = Match::default();
        game.advance(SIM_DT * 0.5);
        assert_eq!(game.world().time_ticks, 0);
        game.advance(SIM_DT * 0.6);
        assert_eq!(game.world().time_ticks, 1);
        game.advance(SIM_DT * 2.0);
        assert_eq!(game.world().time_ticks, 3);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut game = Match::default();
        game.advance(5.0);
        assert_eq!(game.world().time_ticks, MAX_SUBSTEPS as u64);
        // Backlog was dropped, so a tiny frame only finishes the partial step
        game.advance(0.0);
        assert!(game.world().time_ticks <= MAX_SUBSTEPS as u64 + 1);
    }

    #[test]
    fn test_keys_move_user_paddle() {
        let mut game = Match::default();
        let start = game.world().user.y;
        game.key_down(Key::Down);
        game.tick();
        assert_eq!(game.world().user.y, start + PADDLE_STEP);
        assert_eq!(game.key_up(Key::Down), None);
        game.tick();
        assert_eq!(game.world().user.y, start + PADDLE_STEP);
        assert_eq!(game.key_up(Key::Right), Some(Taunt::Right));
    }

    #[test]
    fn test_win_restarts_match() {
        let mut game = Match::default();
        game.key_down(Key::Up);
        game.world.ai.score = WIN_SCORE - 1;
        game.world.ball.pos = Vec2::new(BALL_RADIUS, 200.0);
        game.world.ball.vel = Vec2::new(-4.0, 0.0);

        let events = game.tick();
        assert!(events.contains(&TickEvent::GameOver(Side::Ai)));
        assert_eq!(
            game.last_result(),
            Some(MatchResult {
                winner: Side::Ai,
                user_score: 0,
                ai_score: WIN_SCORE,
            })
        );
        assert_eq!(game.stats().ai_wins, 1);
        assert_eq!(game.world(), &World::default());
        assert_eq!(game.input(), &InputState::default());
    }

    #[test]
    fn test_win_keeps_frame_cadence() {
        let mut game = Match::default();
        game.world.ai.score = WIN_SCORE - 1;
        game.world.ball.pos = Vec2::new(BALL_RADIUS, 200.0);
        game.world.ball.vel = Vec2::new(-4.0, 0.0);

        let events = game.advance(SIM_DT * 1.01);
        assert!(events.contains(&TickEvent::GameOver(Side::Ai)));
        assert_eq!(game.world().time_ticks, 0);
        assert!(game.accumulator >= 0.0);

        // The first full frame of the new match runs its tick
        game.advance(SIM_DT * 1.01);
        assert_eq!(game.world().time_ticks, 1);
    }

    #[test]
    fn test_stats_count_events() {
        let mut game = Match::default();
        game.world.ball.pos = Vec2::new(300.0, 0.0);
        game.world.ball.vel = Vec2::new(0.0, -5.0);
        game.tick();
        assert_eq!(game.stats().wall_bounces, 1);
        assert_eq!(game.stats().paddle_hits, 0);
    }
}
