use clap::Parser;

use octile_pathfinder::config::{AlgorithmChoice, Config};
use octile_pathfinder::simulation::Simulation;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("octile_pathfinder=info")),
        )
        .init();

    let config = Config::parse();

    if !config.quiet {
        println!("Starting pathfinding search...");
        println!("Grid size: {}x{}", config.width, config.height);
        println!("Obstacles: {}", config.num_obstacles);
        println!("Start: {}, Goal: {}", config.start(), config.goal());
        if let Some(size) = config.agent_size {
            println!("Agent size: {}", size);
        }
        println!(
            "Algorithm: {:?}, Frontier: {:?}",
            config.algorithm, config.frontier
        );
        println!();
    }

    let simulation = match Simulation::new(config.clone()) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up the search: {}", e);
            eprintln!("Check --width/--height and the start and goal coordinates");
            std::process::exit(1);
        }
    };

    let results = simulation.run();

    if !config.no_render {
        if let Some(first) = results.first() {
            println!("{}", simulation.render(first));
        }
    }

    if config.algorithm == AlgorithmChoice::All {
        Simulation::print_comparison_results(&results);
    } else if !config.quiet {
        for result in &results {
            println!("=== FINAL RESULTS ===");
            println!("{}", result.statistics);
        }
    }

    for result in &results {
        if let Err(e) = &result.outcome {
            println!("{}: {}", result.name, e);
        }
    }
}
