//! Session module - owns the per-session state and the tick loop rules
//!
//! This module ties together all core components: grid, snake, spawner, and
//! the power-up machine. One `Session` value holds everything that belongs to
//! a single run; the binary creates a fresh value to replay rather than
//! re-entering a game procedure.
//!
//! Per tick, in fixed order: commit the pending steer, advance the snake,
//! resolve collisions (first fatal match wins), count the active effect down,
//! then run the transient spawn trials.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::core::grid::Grid;
use crate::core::powerup::EffectState;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::SessionSnapshot;
use crate::core::spawn::{Slot, Spawner};
use crate::types::{
    Cell, Direction, Phase, PowerUp, BASE_SPEED, GRID_HEIGHT, GRID_WIDTH, MIN_SPEED,
    OBSTACLE_COUNT, POISON_SHRINK, REGULAR_GROWTH, REGULAR_SPEED_BONUS, SLOW_FLOOR, SLOW_PENALTY,
    SPECIAL_GROWTH, SPECIAL_SPEED_BONUS,
};

/// Per-session knobs. `Default` is the standard arena and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub grid_width: i16,
    pub grid_height: i16,
    pub base_speed: u32,
    pub obstacle_count: usize,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            base_speed: BASE_SPEED,
            obstacle_count: OBSTACLE_COUNT,
            seed: 1,
        }
    }
}

/// What killed the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfBody,
    Obstacle,
}

/// Notable outcomes of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    AteRegular,
    AteSpecial,
    AtePoison,
    PowerUpStarted(PowerUp),
    EffectExpired,
    Fatal(CollisionKind),
}

/// At most one food/pickup event, one expiry, or one fatal event per tick
pub type TickEvents = ArrayVec<TickEvent, 4>;

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    snake: Snake,
    spawner: Spawner,
    effect: EffectState,
    rng: SimpleRng,
    /// Permanent speed: base plus cumulative food bonuses
    speed: u32,
    phase: Phase,
    ticks: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let mut rng = SimpleRng::new(config.seed);
        let spawner = Spawner::new(&grid, &mut rng, config.obstacle_count);
        let snake = Snake::new(grid.center(), Direction::Right);

        Self {
            config,
            grid,
            snake,
            spawner,
            effect: EffectState::new(),
            rng,
            speed: config.base_speed,
            phase: Phase::Playing,
            ticks: 0,
        }
    }

    /// A fresh session continuing this one's random sequence, for replay
    pub fn restart(&self) -> Self {
        Self::new(SessionConfig {
            seed: self.rng.seed(),
            ..self.config
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn effect(&self) -> &EffectState {
        &self.effect
    }

    /// Raw score: cells grown beyond the starting length
    pub fn raw_score(&self) -> u32 {
        (self.snake.target_len() - 1) as u32
    }

    /// Score as shown to the player (doubled under DoubleScore)
    pub fn displayed_score(&self) -> u32 {
        self.raw_score() * self.effect.score_multiplier()
    }

    /// Permanent speed, before transient modifiers
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Speed used for this tick's pacing: the permanent speed with the Slow
    /// reduction applied while that effect is active, clamped to stay sane.
    pub fn effective_speed(&self) -> u32 {
        let speed = if self.effect.is_slow() {
            self.speed.saturating_sub(SLOW_PENALTY).max(SLOW_FLOOR)
        } else {
            self.speed
        };
        speed.max(MIN_SPEED)
    }

    /// Loop delay between ticks, inversely derived from the current speed
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(1000 / self.effective_speed() as u64)
    }

    /// Request a direction change for the next tick. Ignored after game
    /// over; the exact reverse of the current heading is always rejected.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.snake.steer(dir)
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::new();
        if self.phase != Phase::Playing {
            return events;
        }
        self.ticks += 1;

        self.snake.step();
        let head = self.snake.head();

        if let Some(kind) = self.fatal_collision(head) {
            self.phase = Phase::GameOver;
            events.push(TickEvent::Fatal(kind));
            return events;
        }

        self.resolve_consumables(head, &mut events);

        let was_active = self.effect.active().is_some();
        self.effect.tick();
        if was_active && self.effect.active().is_none() {
            events.push(TickEvent::EffectExpired);
        }

        self.spawner.maintain(&self.grid, &mut self.rng);
        events
    }

    /// Fatal checks in fixed order; walls are never exempted by Invincible,
    /// self and obstacle hits are.
    fn fatal_collision(&self, head: Cell) -> Option<CollisionKind> {
        if !self.grid.contains(head) {
            return Some(CollisionKind::Wall);
        }
        if self.effect.is_invincible() {
            return None;
        }
        if self.snake.hits_self() {
            return Some(CollisionKind::SelfBody);
        }
        if self.spawner.is_obstacle(head) {
            return Some(CollisionKind::Obstacle);
        }
        None
    }

    /// Checks 4-7: each food category and the power-up pickup. The head can
    /// only occupy one cell, so at most one of these fires per tick.
    fn resolve_consumables(&mut self, head: Cell, events: &mut TickEvents) {
        if head == self.spawner.regular_food() {
            self.snake.grow(REGULAR_GROWTH);
            self.speed += REGULAR_SPEED_BONUS;
            self.spawner.respawn_regular_food(&self.grid, &mut self.rng);
            events.push(TickEvent::AteRegular);
        }
        if self.spawner.special_food() == Some(head) {
            self.snake.grow(SPECIAL_GROWTH);
            self.speed += SPECIAL_SPEED_BONUS;
            self.spawner.clear(Slot::SpecialFood);
            events.push(TickEvent::AteSpecial);
        }
        if self.spawner.poison_food() == Some(head) {
            self.snake.shrink(POISON_SHRINK);
            self.spawner.clear(Slot::PoisonFood);
            events.push(TickEvent::AtePoison);
        }
        if self.spawner.power_up() == Some(head) {
            let effect = self.effect.activate_random(&mut self.rng);
            self.spawner.clear(Slot::PowerUp);
            events.push(TickEvent::PowerUpStarted(effect));
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.body.clear();
        out.body.extend(self.snake.body().iter().copied());
        out.head = self.snake.head();
        out.direction = self.snake.direction();

        out.regular_food = self.spawner.regular_food();
        out.special_food = self.spawner.special_food();
        out.poison_food = self.spawner.poison_food();
        out.power_up = self.spawner.power_up();
        out.obstacles.clear();
        out.obstacles.extend_from_slice(self.spawner.obstacles());

        out.effect = self.effect.active();
        out.effect_remaining = self.effect.remaining_fraction();

        out.score = self.displayed_score();
        out.speed = self.effective_speed();
        out.game_over = self.game_over();
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    #[cfg(test)]
    pub fn spawner_mut(&mut self) -> &mut Spawner {
        &mut self.spawner
    }

    #[cfg(test)]
    pub fn effect_mut(&mut self) -> &mut EffectState {
        &mut self.effect
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
