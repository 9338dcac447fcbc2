//! Resource stocks and their per-turn update rules.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Fraction of the post-consumption food stock lost to spoilage each turn.
pub const FOOD_SPOILAGE_RATE: f64 = 0.05;

/// Storage ceiling for energy; production beyond this is discarded.
pub const ENERGY_MAX_STORAGE: u64 = 200;

/// A named, quantified stock that produces and consumes once per turn.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub name: String,
    pub quantity: u64,
    pub production_rate: i64,
    pub consumption_rate: u64,
    #[serde(flatten)]
    pub kind: ResourceKind,
}

/// Variant-specific behavior attached to a resource.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceKind {
    Basic,
    Food { spoilage_rate: f64 },
    Energy { max_storage: u64 },
}

/// Result of one production step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProduceOutcome {
    pub quantity: u64,
    /// Amount discarded by the storage cap (energy only).
    pub wasted: u64,
}

/// Result of one consumption step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeOutcome {
    pub quantity: u64,
    /// Amount lost to spoilage on top of normal consumption (food only).
    pub spoiled: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("insufficient {resource}: have {available}, requested {requested}")]
    Insufficient {
        resource: String,
        available: u64,
        requested: u64,
    },
}

impl Resource {
    pub fn new(
        name: impl Into<String>,
        quantity: u64,
        production_rate: i64,
        consumption_rate: u64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            production_rate,
            consumption_rate,
            kind: ResourceKind::Basic,
        }
    }

    /// Food stock; loses a fixed fraction to spoilage after each consume.
    pub fn food(quantity: u64, production_rate: i64, consumption_rate: u64) -> Self {
        Self {
            name: "Food".to_string(),
            quantity,
            production_rate,
            consumption_rate,
            kind: ResourceKind::Food {
                spoilage_rate: FOOD_SPOILAGE_RATE,
            },
        }
    }

    /// Energy stock; production is capped at a fixed storage ceiling.
    pub fn energy(quantity: u64, production_rate: i64, consumption_rate: u64) -> Self {
        Self {
            name: "Energy".to_string(),
            quantity,
            production_rate,
            consumption_rate,
            kind: ResourceKind::Energy {
                max_storage: ENERGY_MAX_STORAGE,
            },
        }
    }

    /// Add one turn of production, then apply the storage cap if any.
    pub fn produce(&mut self) -> ProduceOutcome {
        self.quantity = self.quantity.saturating_add_signed(self.production_rate);
        let mut wasted = 0;
        if let ResourceKind::Energy { max_storage } = self.kind {
            if self.quantity > max_storage {
                wasted = self.quantity - max_storage;
                self.quantity = max_storage;
            }
        }
        ProduceOutcome {
            quantity: self.quantity,
            wasted,
        }
    }

    /// Subtract one turn of consumption (floored at zero), then spoilage
    /// computed on the post-consumption quantity if any.
    pub fn consume(&mut self) -> ConsumeOutcome {
        self.quantity = self.quantity.saturating_sub(self.consumption_rate);
        let mut spoiled = 0;
        if let ResourceKind::Food { spoilage_rate } = self.kind {
            spoiled = (self.quantity as f64 * spoilage_rate) as u64;
            self.quantity = self.quantity.saturating_sub(spoiled);
        }
        ConsumeOutcome {
            quantity: self.quantity,
            spoiled,
        }
    }

    /// Move `amount` into `target`. Fails without mutating either stock when
    /// this resource holds less than `amount`.
    pub fn transfer(&mut self, amount: u64, target: &mut Resource) -> Result<(), TransferError> {
        if self.quantity < amount {
            return Err(TransferError::Insufficient {
                resource: self.name.clone(),
                available: self.quantity,
                requested: amount,
            });
        }
        self.quantity -= amount;
        target.quantity = target.quantity.saturating_add(amount);
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (produces {}/turn, consumes {}/turn)",
            self.name, self.quantity, self.production_rate, self.consumption_rate
        )
    }
}
