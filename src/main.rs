use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use outpost::{engine::Simulation, report, scenario::ScenarioLoader};

#[derive(Debug, Parser)]
#[command(author, version, about = "Turn-based colony resource simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/alpha_station.yaml")]
    scenario: PathBuf,

    /// Override turn count (uses scenario default when omitted)
    #[arg(long)]
    turns: Option<u64>,

    /// Print the final colony state as JSON after the run
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let turns = scenario.turns(cli.turns);

    let banner = "=".repeat(60);
    println!("{banner}");
    println!("{}", scenario.name);
    if let Some(description) = &scenario.description {
        println!("{description}");
    }
    println!("{banner}");

    let (colony, bonuses) = scenario.build_colony();
    for bonus in &bonuses {
        println!("{}", report::bonus_line(bonus));
    }

    println!("\nINITIAL STATE");
    print!("{}", report::colony_stats(&colony));

    let mut sim = Simulation::new(colony);
    for _ in 0..turns {
        let summary = sim.advance();
        println!(
            "\n{}",
            report::turn_header(summary.turn, sim.colony().name())
        );
        for warning in report::tick_warnings(&summary.report) {
            println!("{warning}");
        }
        print!("{}", report::colony_stats(sim.colony()));
        for warning in report::stock_warnings(sim.colony()) {
            println!("{warning}");
        }
    }

    println!(
        "\nScenario '{}' completed after {} turns.",
        scenario.name, turns
    );
    if cli.json {
        println!("{}", report::colony_json(sim.colony())?);
    }
    Ok(())
}
