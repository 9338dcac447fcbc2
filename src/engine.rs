//! Turn loop driver over a single colony.

use serde::Serialize;

use crate::colony::{Colony, TickReport};

/// One completed turn.
#[derive(Debug, Clone, Serialize)]
pub struct TickSummary {
    pub turn: u64,
    pub report: TickReport,
}

/// Owns a colony and advances it turn by turn. Deterministic and
/// single-threaded; every run over the same scenario yields the same state.
pub struct Simulation {
    colony: Colony,
    turn: u64,
}

impl Simulation {
    pub fn new(colony: Colony) -> Self {
        Self { colony, turn: 0 }
    }

    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    pub fn colony_mut(&mut self) -> &mut Colony {
        &mut self.colony
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    /// Run one turn and report what happened.
    pub fn advance(&mut self) -> TickSummary {
        self.turn += 1;
        TickSummary {
            turn: self.turn,
            report: self.colony.tick(),
        }
    }

    /// Run `turns` turns, collecting one summary per turn.
    pub fn run(&mut self, turns: u64) -> Vec<TickSummary> {
        (0..turns).map(|_| self.advance()).collect()
    }
}
