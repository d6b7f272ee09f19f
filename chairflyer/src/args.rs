// args.rs - command line configuration for the simulator window

use clap::Parser;
use life_engine::Rules;

/// Windowed cellular-automaton simulator.
#[derive(Debug, Parser)]
#[command(name = "chairflyer", version, about)]
pub struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    pub height: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    pub width: usize,

    /// Probability that a cell starts alive when seeding randomly
    #[arg(short = 'd', long, default_value_t = 0.3)]
    pub density: f64,

    /// Fewest live neighbors an alive cell needs to survive
    #[arg(long, default_value_t = 2)]
    pub min_live: u8,

    /// Most live neighbors an alive cell tolerates before dying
    #[arg(long, default_value_t = 3)]
    pub max_live: u8,

    /// Exact live-neighbor count that births a dead cell
    #[arg(long, default_value_t = 3)]
    pub birth: u8,

    /// Seconds between generations while running
    #[arg(short = 't', long, default_value_t = 0.2)]
    pub tick: f64,

    /// Seed for the initial random fill; drawn from entropy when omitted
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Start paused
    #[arg(short = 'p', long)]
    pub paused: bool,
}

impl Args {
    pub fn rules(&self) -> Rules {
        Rules {
            min_neighbors_to_live: self.min_live,
            max_neighbors_to_live: self.max_live,
            neighbors_to_start: self.birth,
        }
    }
}
