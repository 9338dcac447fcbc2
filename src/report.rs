//! Text and JSON rendering of colony state. All output formatting lives
//! here; the core types only return structured values.

use std::fmt::Write;

use crate::colony::{Colony, ProductionBonus, TickReport};

pub const LOW_FOOD_THRESHOLD: u64 = 50;
pub const LOW_ENERGY_THRESHOLD: u64 = 30;

const RULE_WIDTH: usize = 50;

/// Multi-line stats block: name (with nation tag), population, nation
/// special, then one line per resource.
pub fn colony_stats(colony: &Colony) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let sep = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    writeln!(out, "{rule}").ok();
    match colony.nation() {
        Some(nation) => writeln!(out, "{} [{}]", colony.name(), nation.label()).ok(),
        None => writeln!(out, "{}", colony.name()).ok(),
    };
    writeln!(out, "Population: {}", colony.population()).ok();
    if let Some(nation) = colony.nation() {
        writeln!(out, "Special: {}", nation.bonus_description()).ok();
    }
    writeln!(out, "{sep}").ok();
    if colony.resources().is_empty() {
        writeln!(out, "  No resources").ok();
    } else {
        for resource in colony.resources() {
            writeln!(out, "  {resource}").ok();
        }
    }
    writeln!(out, "{rule}").ok();
    out
}

pub fn bonus_line(bonus: &ProductionBonus) -> String {
    format!(
        "  {} bonus applied! {} production: {}/turn",
        bonus.nation.label(),
        bonus.resource,
        bonus.production_rate
    )
}

pub fn turn_header(turn: u64, colony_name: &str) -> String {
    format!(">>> TURN {turn} <<<\n--- {colony_name} processing turn ---")
}

/// Warning lines for losses observed during a turn (storage overflow).
pub fn tick_warnings(report: &TickReport) -> Vec<String> {
    report
        .resources
        .iter()
        .filter(|r| r.wasted > 0)
        .map(|r| {
            format!(
                "  Warning: {} {} wasted due to storage limits!",
                r.wasted,
                r.name.to_lowercase()
            )
        })
        .collect()
}

/// Warning lines for low stock levels after a turn.
pub fn stock_warnings(colony: &Colony) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(food) = colony.get_resource("Food") {
        if food.quantity < LOW_FOOD_THRESHOLD {
            warnings.push("WARNING: Food supplies running low!".to_string());
        }
    }
    if let Some(energy) = colony.get_resource("Energy") {
        if energy.quantity < LOW_ENERGY_THRESHOLD {
            warnings.push("WARNING: Energy reserves critical!".to_string());
        }
    }
    warnings
}

/// Full colony state as pretty-printed JSON.
pub fn colony_json(colony: &Colony) -> serde_json::Result<String> {
    serde_json::to_string_pretty(colony)
}
