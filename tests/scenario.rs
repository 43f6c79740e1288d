use std::path::PathBuf;

use planet_orbits::{batch, Scenario};

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

#[test]
fn bundled_scenario_matches_default() {
    let file = Scenario::from_path(bundled("solar_system.yaml")).unwrap();
    let default = Scenario::default();

    assert_eq!(file.physics, default.physics);
    assert_eq!(file.display, default.display);
    assert_eq!(file.batch, default.batch);
    for (a, b) in file.bodies.iter().zip(default.bodies.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.primary, b.primary);
        assert!((a.position[0] - b.position[0]).abs() <= 1e-6 * b.position[0].abs());
        assert!((a.velocity[1] - b.velocity[1]).abs() < 1e-6);
        assert!((a.mass - b.mass).abs() <= 1e-9 * b.mass);
    }
}

#[test]
fn bundled_scenario_runs_its_batch() {
    let scenario = Scenario::from_path(bundled("solar_system.yaml")).unwrap();
    let mut system = scenario.build_system().unwrap();
    let history = batch::run(&mut system, scenario.batch.steps).unwrap();

    assert_eq!(history.steps, 365);
    let sun = history.bodies.iter().find(|b| b.primary).unwrap();
    assert_eq!(sun.name, "Sun");
    assert_eq!(sun.distance_to_primary, None);
    assert!(history.bodies.iter().filter(|b| !b.primary).all(|b| b.revolutions.is_some()));
}

#[test]
fn missing_scenario_file_is_an_error() {
    let err = Scenario::from_path(bundled("no_such_file.yaml")).unwrap_err();
    assert!(err.to_string().contains("no_such_file.yaml"));
}
