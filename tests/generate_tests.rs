use assert_fs::prelude::*;
use predicates::prelude::*;

const SCENARIO_YAML: &str = "\
name: baseline
demand:
  seed: 42
  months: 12
  base_level: 1000
  trend_per_period: 10
  noise_std: 50
  peak_month: 12
  peak_factor: 1.8
policy:
  setup_cost: 50
  holding_cost: 2
  service_z: 1.65
  lead_time_days: 9
";

#[test]
fn generate_writes_a_demand_series_with_exact_monthly_sums() {
    let temp = assert_fs::TempDir::new().unwrap();
    let scenario = temp.child("scenario.yaml");
    scenario.write_str(SCENARIO_YAML).unwrap();
    let output = temp.child("demand.yaml");

    let mut cmd = assert_cmd::Command::cargo_bin("stocksim").unwrap();
    cmd.args([
        "generate",
        "-i",
        scenario.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("written to"));

    let contents = std::fs::read_to_string(output.path()).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();

    assert_eq!(report["scenario"].as_str().unwrap(), "baseline");
    let months = report["months"].as_sequence().unwrap();
    assert_eq!(months.len(), 12);
    for month in months {
        let total = month["total"].as_u64().unwrap();
        let daily = month["daily"].as_sequence().unwrap();
        assert_eq!(daily.len(), 30);
        let sum: u64 = daily.iter().map(|value| value.as_u64().unwrap()).sum();
        assert_eq!(sum, total);
    }
}

#[test]
fn generate_is_deterministic_end_to_end() {
    let temp = assert_fs::TempDir::new().unwrap();
    let scenario = temp.child("scenario.yaml");
    scenario.write_str(SCENARIO_YAML).unwrap();

    let first = temp.child("first.yaml");
    let second = temp.child("second.yaml");
    for output in [&first, &second] {
        let mut cmd = assert_cmd::Command::cargo_bin("stocksim").unwrap();
        cmd.args([
            "generate",
            "-i",
            scenario.path().to_str().unwrap(),
            "-o",
            output.path().to_str().unwrap(),
        ]);
        cmd.assert().success();
    }

    let first_contents = std::fs::read_to_string(first.path()).unwrap();
    let second_contents = std::fs::read_to_string(second.path()).unwrap();
    assert_eq!(first_contents, second_contents);
}

#[test]
fn generate_reports_invalid_scenario_parameters() {
    let temp = assert_fs::TempDir::new().unwrap();
    let scenario = temp.child("scenario.yaml");
    scenario
        .write_str(&SCENARIO_YAML.replace("peak_month: 12", "peak_month: 13"))
        .unwrap();
    let output = temp.child("demand.yaml");

    let mut cmd = assert_cmd::Command::cargo_bin("stocksim").unwrap();
    cmd.args([
        "generate",
        "-i",
        scenario.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .stderr(predicate::str::contains("peak month must be between 1 and 12"));
    assert!(!output.path().exists());
}
