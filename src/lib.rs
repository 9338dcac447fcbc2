pub mod colony;
pub mod engine;
pub mod report;
pub mod resource;
pub mod scenario;

pub use colony::{Colony, Nation, ProductionBonus, TickReport};
pub use engine::{Simulation, TickSummary};
pub use resource::{Resource, ResourceKind, TransferError};
pub use scenario::{Scenario, ScenarioLoader};
