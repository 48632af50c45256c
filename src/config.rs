use crate::algorithms::{FrontierKind, SearchConfig};
use crate::grid::Position;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    Octile,
    Reference,
    /// Run every algorithm and compare
    All,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 80)]
    pub width: i32,

    #[arg(long, default_value_t = 80)]
    pub height: i32,

    #[arg(long, default_value_t = 200)]
    pub num_obstacles: usize,

    /// Seed for obstacle placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub start_x: i32,

    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub start_y: i32,

    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub goal_x: i32,

    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    pub goal_y: i32,

    /// Agent footprint in cells
    #[arg(long)]
    pub agent_size: Option<u32>,

    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Octile)]
    pub algorithm: AlgorithmChoice,

    #[arg(long, value_enum, default_value_t = FrontierKind::BinaryHeap)]
    pub frontier: FrontierKind,

    #[arg(long)]
    pub max_iterations: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub no_render: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// Log every opened and closed node at trace level
    #[arg(long, default_value_t = false)]
    pub trace_events: bool,
}

impl Config {
    pub fn start(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    pub fn goal(&self) -> Position {
        Position::new(self.goal_x, self.goal_y)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_iterations: self.max_iterations,
            frontier: self.frontier,
        }
    }
}
