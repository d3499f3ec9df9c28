//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own temporary data directory.

mod common;

use common::Sandbox;

#[test]
fn test_treatment_add_with_defaults() {
    let sb = Sandbox::new();
    let t = sb.run_json(&["treatment", "add"]);
    assert_eq!(t["name"], "Novo Tratamento");
    assert_eq!(t["dosage"], "—");
    assert_eq!(t["frequency"], "Diário");
    assert_eq!(t["dosesPerDay"], 1);
    assert!(t["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[test]
fn test_treatment_list_newest_first() {
    let sb = Sandbox::new();
    assert_eq!(sb.run_json(&["treatment", "list"]), serde_json::json!([]));
    sb.run_success(&["treatment", "add", "Primeiro"]);
    sb.run_success(&["treatment", "add", "Segundo"]);
    let list = sb.run_json(&["treatment", "list"]);
    assert_eq!(list[0]["name"], "Segundo");
    assert_eq!(list[1]["name"], "Primeiro");
}

#[test]
fn test_treatment_take_caps_at_target() {
    let sb = Sandbox::new();
    let t = sb.run_json(&["treatment", "add", "Metformina", "--doses-per-day", "2"]);
    let id = t["id"].as_str().unwrap();

    let first = sb.run_json(&["treatment", "take", id, "--date", "2024-01-15"]);
    assert_eq!(first["pct"], 50);
    sb.run_success(&["treatment", "take", id, "--date", "2024-01-15"]);
    let third = sb.run_json(&["treatment", "take", id, "--date", "2024-01-15"]);
    assert_eq!(third["taken"], 2);
    assert_eq!(third["pct"], 100);

    let list = sb.run_json(&["treatment", "list"]);
    assert_eq!(list[0]["takenByDate"]["2024-01-15"], 2);
}

#[test]
fn test_treatment_take_unknown_id_is_noop() {
    let sb = Sandbox::new();
    let (stdout, _, code) = sb.run(&["treatment", "take", "does-not-exist"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn test_treatment_take_rejects_bad_date() {
    let sb = Sandbox::new();
    let t = sb.run_json(&["treatment", "add", "X"]);
    let (_, stderr, code) = sb.run(&["treatment", "take", t["id"].as_str().unwrap(), "--date", "15/01/2024"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_treatment_status_and_history() {
    let sb = Sandbox::new();
    let t = sb.run_json(&["treatment", "add", "A", "--doses-per-day", "4"]);
    let id = t["id"].as_str().unwrap();
    sb.run_success(&["treatment", "take", id]);

    let status = sb.run_json(&["treatment", "status"]);
    assert_eq!(status[0]["pct"], 25);
    assert_eq!(status[0]["expected"], 4);

    let history = sb.run_json(&["treatment", "history", id, "--days", "3"]);
    let rows = history.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["pct"], 25);
}

#[test]
fn test_cholesterol_chart_json_and_svg() {
    let sb = Sandbox::new();
    let (stdout, _, code) = sb.run(&["cholesterol", "chart"]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());

    for (date, value) in [("1", "5"), ("2", "5"), ("3", "5")] {
        sb.run_success(&["cholesterol", "add", value, "--date", date]);
    }
    let plot = sb.run_json(&["cholesterol", "chart"]);
    let points = plot["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p["y"] == 80.0));

    let svg = sb.run_success(&["cholesterol", "chart", "--svg"]);
    assert!(svg.starts_with("<svg"));
}

#[test]
fn test_cholesterol_rejects_non_numeric_value() {
    let sb = Sandbox::new();
    let (_, _, code) = sb.run(&["cholesterol", "add", "high"]);
    assert_ne!(code, 0);
}

#[test]
fn test_people_and_family() {
    let sb = Sandbox::new();
    sb.run_success(&["people", "add", "Ana", "--relationship", "filha"]);
    let people = sb.run_json(&["people", "list"]);
    assert_eq!(people[0]["relationship"], "filha");

    sb.run_success(&["family", "add", "Hipertensão (pai)"]);
    let family = sb.run_json(&["family", "list"]);
    assert_eq!(family, serde_json::json!(["Hipertensão (pai)"]));
}

#[test]
fn test_config_get_set_reset() {
    let sb = Sandbox::new();
    assert_eq!(sb.run_success(&["config", "get", "chart.width"]).trim(), "320.0");
    assert_eq!(sb.run_success(&["config", "set", "chart.width", "640"]).trim(), "ok");
    assert_eq!(sb.run_success(&["config", "get", "chart.width"]).trim(), "640.0");
    let (_, _, code) = sb.run(&["config", "get", "chart.nope"]);
    assert_ne!(code, 0);
    sb.run_success(&["config", "reset"]);
    assert_eq!(sb.run_success(&["config", "get", "chart.width"]).trim(), "320.0");
}
