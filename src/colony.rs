//! Colonies: named settlements that own resources and advance once per turn.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Nation affiliations. Each nation boosts one resource's production rate,
/// applied once at the moment the resource is added to the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nation {
    TerranEmpire,
    MartianFederation,
}

impl Nation {
    pub fn label(&self) -> &'static str {
        match self {
            Nation::TerranEmpire => "Terran Empire",
            Nation::MartianFederation => "Martian Federation",
        }
    }

    /// Name of the resource this nation's bonus applies to.
    pub fn bonus_target(&self) -> &'static str {
        match self {
            Nation::TerranEmpire => "Food",
            Nation::MartianFederation => "Energy",
        }
    }

    pub fn bonus_factor(&self) -> f64 {
        match self {
            Nation::TerranEmpire => 1.2,
            Nation::MartianFederation => 1.3,
        }
    }

    pub fn bonus_description(&self) -> &'static str {
        match self {
            Nation::TerranEmpire => "+20% Food Production",
            Nation::MartianFederation => "+30% Energy Production",
        }
    }
}

/// Record of a nation bonus applied when a resource was added.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionBonus {
    pub nation: Nation,
    pub resource: String,
    pub factor: f64,
    /// Production rate after the bonus.
    pub production_rate: i64,
}

/// Per-resource outcome of one colony turn.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceTick {
    pub name: String,
    pub quantity: u64,
    pub wasted: u64,
    pub spoiled: u64,
}

/// Outcome of one colony turn, in resource insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub colony: String,
    pub resources: Vec<ResourceTick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Colony {
    name: String,
    population: u64,
    nation: Option<Nation>,
    resources: Vec<Resource>,
}

impl Colony {
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
            nation: None,
            resources: Vec::new(),
        }
    }

    pub fn with_nation(name: impl Into<String>, population: u64, nation: Nation) -> Self {
        Self {
            name: name.into(),
            population,
            nation: Some(nation),
            resources: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn nation(&self) -> Option<Nation> {
        self.nation
    }

    /// Resources in insertion order, the order `tick` processes them.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Add a resource, replacing any existing entry with the same name
    /// (the replacement keeps the original slot, so turn order is stable).
    ///
    /// If the colony's nation targets this resource, its production rate is
    /// multiplied by the nation factor and truncated, once, here. Re-adding
    /// the same resource therefore compounds the bonus.
    pub fn add_resource(&mut self, mut resource: Resource) -> Option<ProductionBonus> {
        let bonus = self.nation.and_then(|nation| {
            if resource.name == nation.bonus_target() {
                resource.production_rate =
                    (resource.production_rate as f64 * nation.bonus_factor()) as i64;
                Some(ProductionBonus {
                    nation,
                    resource: resource.name.clone(),
                    factor: nation.bonus_factor(),
                    production_rate: resource.production_rate,
                })
            } else {
                None
            }
        });
        match self.resources.iter_mut().find(|r| r.name == resource.name) {
            Some(slot) => *slot = resource,
            None => self.resources.push(resource),
        }
        bonus
    }

    pub fn get_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn get_resource_mut(&mut self, name: &str) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|r| r.name == name)
    }

    /// Run one full produce-then-consume cycle on every resource, in
    /// insertion order. Each resource's cycle completes before the next
    /// resource starts.
    pub fn tick(&mut self) -> TickReport {
        let mut resources = Vec::with_capacity(self.resources.len());
        for resource in &mut self.resources {
            let produced = resource.produce();
            let consumed = resource.consume();
            resources.push(ResourceTick {
                name: resource.name.clone(),
                quantity: consumed.quantity,
                wasted: produced.wasted,
                spoiled: consumed.spoiled,
            });
        }
        TickReport {
            colony: self.name.clone(),
            resources,
        }
    }
}
