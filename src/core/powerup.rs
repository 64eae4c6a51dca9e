//! Power-up state machine
//!
//! Tracks the single active effect and its tick countdown. The machine only
//! owns the timer; the rule changes an effect imposes (collision exemptions,
//! score doubling, speed reduction) are applied by the components that
//! consume it.

use crate::core::rng::SimpleRng;
use crate::types::{PowerUp, EFFECT_DURATION_TICKS};

#[derive(Debug, Clone, Default)]
pub struct EffectState {
    active: Option<PowerUp>,
    ticks_left: u32,
}

impl EffectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<PowerUp> {
        self.active
    }

    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }

    /// Remaining duration as a fraction of the full window, for display
    pub fn remaining_fraction(&self) -> f32 {
        if self.active.is_none() {
            return 0.0;
        }
        self.ticks_left as f32 / EFFECT_DURATION_TICKS as f32
    }

    /// Activate `effect`, replacing any effect already in force and
    /// resetting the countdown to the full duration.
    pub fn activate(&mut self, effect: PowerUp) {
        self.active = Some(effect);
        self.ticks_left = EFFECT_DURATION_TICKS;
    }

    /// Activate a uniformly random effect
    pub fn activate_random(&mut self, rng: &mut SimpleRng) -> PowerUp {
        let effect = *rng.pick(&PowerUp::ALL);
        self.activate(effect);
        effect
    }

    /// Count down one tick; the effect expires when the counter hits zero.
    pub fn tick(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.active = None;
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.active == Some(PowerUp::Invincible)
    }

    pub fn is_slow(&self) -> bool {
        self.active == Some(PowerUp::Slow)
    }

    /// Multiplier applied to the displayed score
    pub fn score_multiplier(&self) -> u32 {
        if self.active == Some(PowerUp::DoubleScore) {
            2
        } else {
            1
        }
    }
}
