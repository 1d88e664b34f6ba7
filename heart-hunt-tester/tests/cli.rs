use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "heart-hunt-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_heart-hunt-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("fresh-guard"));
}

#[test]
fn cli_runs_every_scenario_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_heart-hunt-tester");
    let output_path = temp_path("all");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "all",
            "--seeds",
            "1,2",
            "--iterations",
            "3",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Heart Hunt Automated Tester"));

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).expect("read report"))
            .expect("json report");
    assert_eq!(report["total"], 16);
    assert_eq!(report["failed"], 0);
}

#[test]
fn cli_fails_on_unknown_scenario() {
    let exe = env!("CARGO_BIN_EXE_heart-hunt-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "smoke,not-a-scenario", "--iterations", "1"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown scenario"));
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_heart-hunt-tester");
    let output = Command::new(exe)
        .args(["--seeds", "abc"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid seed"));
}
