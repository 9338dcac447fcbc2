use outpost::{
    engine::Simulation,
    resource::{Resource, ENERGY_MAX_STORAGE},
    scenario::ScenarioLoader,
    Colony, Nation,
};

fn scenario_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn alpha_station_five_turn_run_is_deterministic() {
    let scenario = scenario_loader()
        .load("scenarios/alpha_station.yaml")
        .unwrap();
    let (colony, bonuses) = scenario.build_colony();
    assert_eq!(bonuses.len(), 1);
    // Terran bonus lands before the first turn: floor(10 * 1.2) = 12.
    assert_eq!(colony.get_resource("Food").unwrap().production_rate, 12);

    let mut sim = Simulation::new(colony);
    let summaries = sim.run(scenario.turns(None));
    assert_eq!(summaries.len(), 5);

    // Food per turn: +12, -5, then 5% spoilage on the remainder.
    assert_eq!(summaries[0].report.resources[0].quantity, 102);
    assert_eq!(sim.colony().get_resource("Food").unwrap().quantity, 110);
    // Energy per turn: +15, -8, never near the cap.
    assert_eq!(summaries[0].report.resources[1].quantity, 57);
    assert_eq!(sim.colony().get_resource("Energy").unwrap().quantity, 85);
    for summary in &summaries {
        for resource in &summary.report.resources {
            assert_eq!(resource.wasted, 0);
            assert!(resource.quantity <= ENERGY_MAX_STORAGE);
        }
    }
}

#[test]
fn red_basin_overflows_its_energy_storage() {
    let scenario = scenario_loader().load("scenarios/red_basin.yaml").unwrap();
    let (colony, bonuses) = scenario.build_colony();
    // Martian bonus: floor(40 * 1.3) = 52.
    assert_eq!(bonuses[0].production_rate, 52);
    assert_eq!(colony.nation(), Some(Nation::MartianFederation));

    let mut sim = Simulation::new(colony);
    let summary = sim.advance();
    let energy = &summary.report.resources[0];
    assert_eq!(energy.name, "Energy");
    // 150 + 52 = 202, capped at 200 with 2 wasted, then -12.
    assert_eq!(energy.wasted, 2);
    assert_eq!(energy.quantity, 188);
}

#[test]
fn quantities_never_go_negative_under_heavy_consumption() {
    let mut colony = Colony::new("Famine Row", 200);
    colony.add_resource(Resource::food(12, 0, 100));
    colony.add_resource(Resource::energy(3, 1, 50));

    let mut sim = Simulation::new(colony);
    for summary in sim.run(3) {
        for resource in &summary.report.resources {
            assert_eq!(resource.quantity, 0, "turn {}", summary.turn);
        }
    }
}

#[test]
fn transfer_between_colonies_conserves_total() {
    let mut alpha = Colony::with_nation("Alpha Station", 150, Nation::TerranEmpire);
    alpha.add_resource(Resource::food(100, 10, 5));
    let mut beta = Colony::new("Beta Site", 40);
    beta.add_resource(Resource::food(10, 2, 4));

    let source = alpha.get_resource_mut("Food").unwrap();
    let target = beta.get_resource_mut("Food").unwrap();
    source.transfer(25, target).unwrap();

    assert_eq!(alpha.get_resource("Food").unwrap().quantity, 75);
    assert_eq!(beta.get_resource("Food").unwrap().quantity, 35);
}
