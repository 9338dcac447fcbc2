use std::fs;

use outpost::scenario::{ScenarioError, ScenarioLoader};

#[test]
fn loader_resolves_files_against_its_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("outpost.yaml"),
        r#"
name: tempdir_outpost
colony:
  name: Temp Station
  population: 25
  resources:
    - kind: food
      quantity: 40
"#,
    )
    .unwrap();

    let loader = ScenarioLoader::new(dir.path());
    let scenario = loader.load("outpost.yaml").unwrap();
    assert_eq!(scenario.name, "tempdir_outpost");
    // No turns key: falls back to the default, overridable by the caller.
    assert_eq!(scenario.turns(None), 5);
    assert_eq!(scenario.turns(Some(12)), 12);

    let (colony, bonuses) = scenario.build_colony();
    assert_eq!(colony.population(), 25);
    assert!(colony.nation().is_none());
    assert!(bonuses.is_empty());
    assert_eq!(colony.get_resource("Food").unwrap().quantity, 40);
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ScenarioLoader::new(dir.path());
    let err = loader.load("no_such.yaml").unwrap_err();
    assert!(matches!(err, ScenarioError::Io { .. }));
}

#[test]
fn malformed_yaml_reports_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.yaml"), "name: [unclosed").unwrap();
    let loader = ScenarioLoader::new(dir.path());
    let err = loader.load("broken.yaml").unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}

#[test]
fn shipped_scenarios_all_load_and_validate() {
    let loader = ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"));
    for file in ["scenarios/alpha_station.yaml", "scenarios/red_basin.yaml"] {
        let scenario = loader.load(file).unwrap();
        assert!(!scenario.colony.resources.is_empty(), "{file}");
    }
}
