use crate::algorithms::{Path, PathfindingAlgorithm, PathfindingEngine, ReferenceAStar};
use crate::config::{AlgorithmChoice, Config};
use crate::error::{Endpoint, Result};
use crate::grid::{ObstacleField, Position};
use crate::observer::{RecordingObserver, TracingObserver};
use crate::statistics::Statistics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

/// Field and endpoints for one run.
#[derive(Debug, Clone)]
pub struct EnvironmentSetup {
    pub field: ObstacleField,
    pub start: Position,
    pub goal: Position,
    pub agent_size: Option<u32>,
}

impl EnvironmentSetup {
    /// Generate obstacles from the configuration. The same seed always gives
    /// the same field.
    pub fn generate(config: &Config) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = config.start();
        let goal = config.goal();

        let field = ObstacleField::random(
            config.width,
            config.height,
            config.num_obstacles,
            &mut rng,
            &[start, goal],
        )?;
        field.check_endpoint(Endpoint::Start, start)?;
        field.check_endpoint(Endpoint::Goal, goal)?;

        info!(
            %start,
            %goal,
            width = field.width(),
            height = field.height(),
            blocked = field.blocked_count(),
            "generated environment"
        );

        Ok(EnvironmentSetup {
            field,
            start,
            goal,
            agent_size: config.agent_size,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub name: &'static str,
    pub outcome: Result<Path>,
    pub statistics: Statistics,
    /// Closed positions in expansion order, for rendering.
    pub explored: Vec<Position>,
}

pub struct Simulation {
    environment: EnvironmentSetup,
    config: Config,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self> {
        let environment = EnvironmentSetup::generate(&config)?;
        Ok(Self::with_environment(config, environment))
    }

    pub fn with_environment(config: Config, environment: EnvironmentSetup) -> Self {
        Simulation {
            environment,
            config,
        }
    }

    pub fn environment(&self) -> &EnvironmentSetup {
        &self.environment
    }

    pub fn algorithms(&self) -> Vec<Box<dyn PathfindingAlgorithm>> {
        let engine = || -> Box<dyn PathfindingAlgorithm> {
            Box::new(PathfindingEngine::new(self.config.search_config()))
        };
        let reference = || -> Box<dyn PathfindingAlgorithm> { Box::new(ReferenceAStar::new()) };

        match self.config.algorithm {
            AlgorithmChoice::Octile => vec![engine()],
            AlgorithmChoice::Reference => vec![reference()],
            AlgorithmChoice::All => vec![engine(), reference()],
        }
    }

    pub fn run(&self) -> Vec<AlgorithmResult> {
        self.algorithms()
            .iter()
            .map(|algorithm| self.run_algorithm(algorithm.as_ref()))
            .collect()
    }

    pub fn run_algorithm(&self, algorithm: &dyn PathfindingAlgorithm) -> AlgorithmResult {
        let env = &self.environment;
        let mut recorder = RecordingObserver::new();

        let started = Instant::now();
        let outcome = if self.config.trace_events {
            let mut observer = (&mut recorder, TracingObserver);
            algorithm.find_path_observed(
                env.start,
                env.goal,
                &env.field,
                env.agent_size,
                &mut observer,
            )
        } else {
            algorithm.find_path_observed(
                env.start,
                env.goal,
                &env.field,
                env.agent_size,
                &mut recorder,
            )
        };
        let elapsed = started.elapsed();

        let statistics = Statistics::new(
            algorithm.name(),
            &outcome,
            &env.field,
            env.start,
            env.goal,
            elapsed,
        );

        AlgorithmResult {
            name: algorithm.name(),
            outcome,
            statistics,
            explored: recorder.closed(),
        }
    }

    /// Text rendering of the field with the result's path and explored cells.
    pub fn render(&self, result: &AlgorithmResult) -> String {
        let env = &self.environment;
        let path = match &result.outcome {
            Ok(path) => path.waypoints.as_slice(),
            Err(_) => &[],
        };

        env.field
            .view(env.start, env.goal)
            .with_path(path)
            .with_explored(&result.explored)
            .to_string()
    }

    pub fn print_comparison_results(results: &[AlgorithmResult]) {
        println!("\n=== ALGORITHM COMPARISON ===");
        println!(
            "{:<12} {:>8} {:>10} {:>8} {:>10} {:>12}",
            "Algorithm", "Success", "Cost", "Steps", "Expanded", "Time"
        );
        println!("{}", "-".repeat(65));

        for result in results {
            let stats = &result.statistics;
            let cost = stats
                .path_cost
                .map_or_else(|| "-".to_string(), |cost| cost.to_string());
            println!(
                "{:<12} {:>8} {:>10} {:>8} {:>10} {:>12.2?}",
                result.name,
                if stats.success { "yes" } else { "no" },
                cost,
                stats.path_steps,
                stats.nodes_expanded,
                stats.elapsed
            );
        }

        let costs: Vec<Option<u64>> = results.iter().map(|r| r.statistics.path_cost).collect();
        if costs.windows(2).all(|pair| pair[0] == pair[1]) {
            println!("\nAll algorithms agree on the path cost.");
        } else {
            println!("\nWARNING: algorithms disagree on the path cost!");
        }
    }
}
