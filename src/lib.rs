//! Arcade Pong - keyboard paddle versus a reactive AI on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, rebounds)
//! - `game`: Fixed-rate match driver around the simulation step
//! - `renderer`: Draw list built from the world, plus the canvas backend
//! - `announcer`: Status line text reacting to simulation events
//! - `input`: Keyboard mapping to input flags
//! - `config`: Court dimensions with startup validation
//! - `settings`: Persisted player preferences
//! - `audio`: Sound effects for simulation events
//! - `demo`: Seeded autopilot for headless matches

pub mod announcer;
pub mod audio;
pub mod config;
pub mod demo;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, Court};
pub use game::Match;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 8.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 10.0;
    /// Distance the user paddle moves per tick while a key is held
    pub const PADDLE_STEP: f32 = 6.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_START_SPEED: f32 = 10.0;
    pub const BALL_START_VELOCITY: (f32, f32) = (5.0, 5.0);
    /// Speed after a point is scored (slower than the opening serve)
    pub const BALL_RESET_SPEED: f32 = 7.0;
    /// Added to ball speed on every paddle hit, uncapped
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;
    /// Rebound angle magnitude for off-center hits (45 degrees)
    pub const REBOUND_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Fraction of the gap the AI paddle closes each tick
    pub const AI_PURSUIT_GAIN: f32 = 0.09;

    /// First side to reach this score wins
    pub const WIN_SCORE: u32 = 20;

    /// Center net
    pub const NET_WIDTH: f32 = 4.0;
}
