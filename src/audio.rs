//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! The event-to-effect mapping is shared by every target; playback is
//! browser-only.

use crate::input::Taunt;
use crate::sim::TickEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Someone scored
    Score,
    /// Left arrow released ("oops")
    TauntLeft,
    /// Right arrow released ("error" buzz)
    TauntRight,
}

impl SoundEffect {
    /// Effect for a simulation event. A win is already announced by its point.
    pub fn for_event(event: &TickEvent) -> Option<Self> {
        match event {
            TickEvent::WallBounce => Some(SoundEffect::WallHit),
            TickEvent::PaddleHit(_) => Some(SoundEffect::PaddleHit),
            TickEvent::Score(_) => Some(SoundEffect::Score),
            TickEvent::GameOver(_) => None,
        }
    }

    pub fn for_taunt(taunt: Taunt) -> Self {
        match taunt {
            Taunt::Left => SoundEffect::TauntLeft,
            Taunt::Right => SoundEffect::TauntRight,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Pick up volume/mute changes
        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
                SoundEffect::WallHit => self.play_wall_hit(ctx, vol),
                SoundEffect::Score => self.play_score(ctx, vol),
                SoundEffect::TauntLeft => self.play_oops(ctx, vol),
                SoundEffect::TauntRight => self.play_error(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short blip with exponential decay
        fn blip(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
            level: f32,
            len: f64,
        ) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(level, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + len)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + len + 0.02).ok();
        }

        /// Paddle hit - square-wave pock
        fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 440.0, OscillatorType::Square, vol * 0.3, 0.06);
        }

        /// Wall hit - lower ping
        fn play_wall_hit(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 220.0, OscillatorType::Sine, vol * 0.4, 0.08);
        }

        /// Point scored - two rising notes
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in [523.0, 784.0].iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.2).ok();
                }
            }
        }

        /// Left taunt - falling "oops" slide
        fn play_oops(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 600.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.frequency().set_value_at_time(600.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(200.0, t + 0.3)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.35).ok();
        }

        /// Right taunt - low error buzz
        fn play_error(&self, ctx: &AudioContext, vol: f32) {
            self.blip(ctx, 110.0, OscillatorType::Sawtooth, vol * 0.25, 0.25);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            SoundEffect::for_event(&TickEvent::WallBounce),
            Some(SoundEffect::WallHit)
        );
        assert_eq!(
            SoundEffect::for_event(&TickEvent::PaddleHit(Side::Ai)),
            Some(SoundEffect::PaddleHit)
        );
        assert_eq!(
            SoundEffect::for_event(&TickEvent::Score(Side::User)),
            Some(SoundEffect::Score)
        );
        assert_eq!(SoundEffect::for_event(&TickEvent::GameOver(Side::User)), None);
    }

    #[test]
    fn test_taunt_sounds() {
        assert_eq!(SoundEffect::for_taunt(Taunt::Left), SoundEffect::TauntLeft);
        assert_eq!(SoundEffect::for_taunt(Taunt::Right), SoundEffect::TauntRight);
    }
}
