//! Entity spawner - food slots, the power-up pickup, and static obstacles
//!
//! Regular food always exists and respawns on consumption. Special food,
//! poison food, and the power-up pickup are transient slots: empty or holding
//! one cell, refilled by independent per-tick Bernoulli trials. Obstacles are
//! placed once at session start and never move.
//!
//! Placement never checks occupancy, so an entity can land under the actor,
//! an obstacle, or another slot.

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::types::{Cell, Chance, POISON_FOOD_CHANCE, POWER_UP_CHANCE, SPECIAL_FOOD_CHANCE};

/// The three transient slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    SpecialFood,
    PoisonFood,
    PowerUp,
}

#[derive(Debug, Clone)]
pub struct Spawner {
    regular_food: Cell,
    special_food: Option<Cell>,
    poison_food: Option<Cell>,
    power_up: Option<Cell>,
    obstacles: Vec<Cell>,
}

impl Spawner {
    /// Place the initial regular food and the session's fixed obstacle set
    pub fn new(grid: &Grid, rng: &mut SimpleRng, obstacle_count: usize) -> Self {
        let obstacles = (0..obstacle_count).map(|_| grid.random_cell(rng)).collect();
        Self {
            regular_food: grid.random_cell(rng),
            special_food: None,
            poison_food: None,
            power_up: None,
            obstacles,
        }
    }

    pub fn regular_food(&self) -> Cell {
        self.regular_food
    }

    pub fn special_food(&self) -> Option<Cell> {
        self.special_food
    }

    pub fn poison_food(&self) -> Option<Cell> {
        self.poison_food
    }

    pub fn power_up(&self) -> Option<Cell> {
        self.power_up
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(&cell)
    }

    /// Move the regular food to a fresh random cell (after consumption)
    pub fn respawn_regular_food(&mut self, grid: &Grid, rng: &mut SimpleRng) {
        self.regular_food = grid.random_cell(rng);
    }

    /// Empty a transient slot after consumption
    pub fn clear(&mut self, slot: Slot) {
        match slot {
            Slot::SpecialFood => self.special_food = None,
            Slot::PoisonFood => self.poison_food = None,
            Slot::PowerUp => self.power_up = None,
        }
    }

    /// Run the per-tick spawn trials for every empty transient slot.
    ///
    /// The trials are independent, so more than one slot can fill on the
    /// same tick.
    pub fn maintain(&mut self, grid: &Grid, rng: &mut SimpleRng) {
        Self::try_fill(&mut self.special_food, SPECIAL_FOOD_CHANCE, grid, rng);
        Self::try_fill(&mut self.poison_food, POISON_FOOD_CHANCE, grid, rng);
        Self::try_fill(&mut self.power_up, POWER_UP_CHANCE, grid, rng);
    }

    fn try_fill(slot: &mut Option<Cell>, chance: Chance, grid: &Grid, rng: &mut SimpleRng) {
        if slot.is_none() && rng.roll(chance) {
            *slot = Some(grid.random_cell(rng));
        }
    }

    #[cfg(test)]
    pub fn set_regular_food(&mut self, cell: Cell) {
        self.regular_food = cell;
    }

    #[cfg(test)]
    pub fn set_special_food(&mut self, cell: Option<Cell>) {
        self.special_food = cell;
    }

    #[cfg(test)]
    pub fn set_poison_food(&mut self, cell: Option<Cell>) {
        self.poison_food = cell;
    }

    #[cfg(test)]
    pub fn set_power_up(&mut self, cell: Option<Cell>) {
        self.power_up = cell;
    }

    #[cfg(test)]
    pub fn set_obstacles(&mut self, obstacles: Vec<Cell>) {
        self.obstacles = obstacles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH, OBSTACLE_COUNT};

    fn grid() -> Grid {
        Grid::new(GRID_WIDTH, GRID_HEIGHT)
    }

    #[test]
    fn test_new_spawner_has_food_and_obstacles_only() {
        let grid = grid();
        let mut rng = SimpleRng::new(1);
        let spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);

        assert!(grid.contains(spawner.regular_food()));
        assert_eq!(spawner.obstacles().len(), OBSTACLE_COUNT);
        assert!(spawner.obstacles().iter().all(|&c| grid.contains(c)));

        assert_eq!(spawner.special_food(), None);
        assert_eq!(spawner.poison_food(), None);
        assert_eq!(spawner.power_up(), None);
    }

    #[test]
    fn test_obstacles_never_move() {
        let grid = grid();
        let mut rng = SimpleRng::new(2);
        let mut spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);
        let placed = spawner.obstacles().to_vec();

        for _ in 0..500 {
            spawner.maintain(&grid, &mut rng);
            spawner.respawn_regular_food(&grid, &mut rng);
        }
        assert_eq!(spawner.obstacles(), placed.as_slice());
    }

    #[test]
    fn test_maintain_eventually_fills_every_slot() {
        let grid = grid();
        let mut rng = SimpleRng::new(3);
        let mut spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);

        // 2% and 0.5% per tick: a few thousand ticks fills all slots with
        // overwhelming probability under a fixed seed.
        for _ in 0..5000 {
            spawner.maintain(&grid, &mut rng);
        }
        assert!(spawner.special_food().is_some());
        assert!(spawner.poison_food().is_some());
        assert!(spawner.power_up().is_some());
    }

    #[test]
    fn test_filled_slot_is_left_alone() {
        let grid = grid();
        let mut rng = SimpleRng::new(4);
        let mut spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);

        for _ in 0..5000 {
            spawner.maintain(&grid, &mut rng);
        }
        let special = spawner.special_food();
        for _ in 0..100 {
            spawner.maintain(&grid, &mut rng);
        }
        assert_eq!(spawner.special_food(), special);
    }

    #[test]
    fn test_clear_empties_only_the_named_slot() {
        let grid = grid();
        let mut rng = SimpleRng::new(5);
        let mut spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);
        for _ in 0..5000 {
            spawner.maintain(&grid, &mut rng);
        }

        spawner.clear(Slot::PoisonFood);
        assert_eq!(spawner.poison_food(), None);
        assert!(spawner.special_food().is_some());
        assert!(spawner.power_up().is_some());
    }

    #[test]
    fn test_respawn_regular_food_stays_in_bounds() {
        let grid = grid();
        let mut rng = SimpleRng::new(6);
        let mut spawner = Spawner::new(&grid, &mut rng, OBSTACLE_COUNT);
        for _ in 0..200 {
            spawner.respawn_regular_food(&grid, &mut rng);
            assert!(grid.contains(spawner.regular_food()));
        }
    }
}
