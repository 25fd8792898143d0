//! Replays every JSON scenario under `scenarios/`.

use std::path::PathBuf;

use drive_tests::Scenario;

fn scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

#[test]
fn all_scenarios_pass() -> anyhow::Result<()> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(scenario_dir())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no scenarios found");

    let mut failures = Vec::new();
    for path in &paths {
        let scenario = Scenario::load(path)?;
        let state = scenario.run();
        if let Err(e) = scenario.check(&state) {
            failures.push(e);
        }
    }

    assert!(failures.is_empty(), "scenario failures: {failures:#?}");
    Ok(())
}
