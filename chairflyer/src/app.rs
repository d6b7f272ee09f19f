// app.rs - simulator state driving the egui front-end

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use egui::Color32;
use life_engine::{Engine, Grid, PATTERNS, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::Args;
use crate::pacing::Cadence;
use crate::player::Player;

/// How many recent generation hashes are kept for cycle detection.
const HISTORY_LEN: usize = 10;

pub struct App {
    pub engine: Engine,
    pub grid: Grid,
    pub paused: bool,
    pub debug: bool,
    pub mute: bool,
    pub cadence: Cadence,
    pub generation: u64,
    pub player: Player,
    pub selected_pattern: usize,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub status: String,
    density: f64,
    rng: StdRng,
    history: [u64; HISTORY_LEN],
    history_count: usize,
}

impl App {
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let engine = Engine::new(args.rules())?;
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let grid = Grid::random(args.height, args.width, args.density, &mut rng)?;
        let tick = Duration::from_secs_f64(args.tick.max(0.01));

        Ok(Self {
            engine,
            grid,
            paused: args.paused,
            debug: false,
            mute: false,
            cadence: Cadence::new(tick),
            generation: 0,
            player: Player::default(),
            selected_pattern: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            status: String::from("program started"),
            density: args.density,
            rng,
            history: [0; HISTORY_LEN],
            history_count: 0,
        })
    }

    /// Runs one simulation tick when unpaused and the cadence allows it.
    pub fn maybe_step(&mut self, now: Instant) {
        if self.paused || !self.cadence.due(now) {
            return;
        }
        self.step();
    }

    fn step(&mut self) {
        if let Err(err) = self.engine.advance(&mut self.grid) {
            log::error!("advance failed: {err}");
            self.status = format!("error: {err}");
            self.paused = true;
            return;
        }
        self.generation += 1;
        self.player.add_points(1);

        if self.grid.live_cells() == 0 {
            self.colony_lost("colony died out");
        } else if self.check_for_cycle() {
            self.colony_lost("colony settled into a cycle");
        }
    }

    fn colony_lost(&mut self, reason: &str) {
        self.paused = true;
        if self.player.take_life() {
            self.status = format!("{reason}; {} lives left", self.player.lives());
        } else {
            self.player.reset();
            self.reseed();
            self.status = String::from("out of lives, starting over");
        }
    }

    /// Bumps the level, reseeds the grid, and pauses.
    pub fn next_level(&mut self) {
        self.player.next_level();
        self.reseed();
        self.paused = true;
        self.status = format!("level {}", self.player.level());
    }

    pub fn reseed(&mut self) {
        match Grid::random(
            self.grid.height(),
            self.grid.width(),
            self.density,
            &mut self.rng,
        ) {
            Ok(grid) => self.grid = grid,
            Err(err) => self.status = format!("error: {err}"),
        }
        self.generation = 0;
        self.clear_history();
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.clear_history();
    }

    pub fn apply_pattern(&mut self, index: usize) {
        let Some(pattern) = PATTERNS.get(index) else {
            return;
        };
        if let Err(err) = patterns::apply(&mut self.grid, pattern) {
            self.status = format!("{} does not fit: {err}", pattern.name);
            return;
        }
        self.generation = 0;
        self.clear_history();
        self.status = format!("seeded {}", pattern.name);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        if !self.paused {
            self.cadence.reset(now);
        }
        self.status = String::from(if self.paused { "paused" } else { "running" });
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Err(err) = self.grid.toggle(row, col) {
            log::debug!("toggle outside grid: {err}");
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for (_, _, alive) in self.grid.iter() {
            alive.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let hash = self.hash_grid();
        let filled = self.history_count.min(HISTORY_LEN);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.history_count % HISTORY_LEN] = hash;
        self.history_count += 1;
        false
    }

    fn clear_history(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.history_count = 0;
    }
}
