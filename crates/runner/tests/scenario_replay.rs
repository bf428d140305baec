//! Scenario Replay Integration Test
//!
//! Loads scenarios from JSON and replays them end to end:
//! - Context changes re-pricing the ladder
//! - Validation verdicts recorded in the report
//! - Actions with no effect recorded, not fatal

use ladder_core::Side;
use ladder_runner::{Action, Scenario, ScenarioError, ScenarioRunner};
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

/// The bundled sell scenario ends in a valid three-target ladder
#[test]
fn test_sell_scenario_file() {
    let _ = env_logger::try_init();
    let scenario = Scenario::from_file(scenario_path("sell_ladder.json")).unwrap();
    let report = ScenarioRunner::run(&scenario).unwrap();

    assert_eq!(report.context.side, Side::Sell);
    assert!(report.enabled);

    let rows: Vec<(&str, &str, &str)> = report
        .targets
        .iter()
        .map(|t| {
            (
                t.profit_percent.as_str(),
                t.target_price.as_str(),
                t.allocation_percent.as_str(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![("2", "98", "50"), ("4", "96", "30"), ("10", "90", "20")]
    );

    assert_eq!(report.last_validation, Some(true));
    assert_eq!(report.error_message, "");
    // 2 * 2 + 1.2 * 4 + 0.8 * 10
    assert_eq!(report.projected_profit, dec!(16.8));
    assert_eq!(report.columns[2].title, "Amount to sell");

    let last = report.steps.last().unwrap();
    assert_eq!(last.action, Action::RemoveTarget { index: 7 });
    assert!(!last.applied);
}

/// A failing validation leaves its message in the report
#[test]
fn test_failed_validation_reported() {
    let _ = env_logger::try_init();
    let scenario = Scenario::from_json(
        r#"{
            "context": { "price": "100", "amount": "10", "side": "Buy" },
            "actions": [
                { "action": "enable" },
                { "action": "edit_allocation", "index": 0, "value": "60" },
                { "action": "validate" }
            ]
        }"#,
    )
    .unwrap();

    let report = ScenarioRunner::run(&scenario).unwrap();

    assert_eq!(report.last_validation, Some(false));
    assert_eq!(
        report.error_message,
        "60 out of 100% selected. Please increase by 40.00"
    );
    assert!(report.targets.iter().all(|t| t.has_error));
    assert_eq!(report.projected_profit, dec!(12));
}

/// Full ladder: the sixth add is recorded as not applied
#[test]
fn test_add_beyond_limit_not_applied() {
    let scenario = Scenario {
        actions: std::iter::once(Action::Enable)
            .chain(std::iter::repeat_n(Action::AddTarget, 5))
            .collect(),
        ..Default::default()
    };

    let report = ScenarioRunner::run(&scenario).unwrap();

    assert_eq!(report.targets.len(), 5);
    let applied: Vec<bool> = report.steps.iter().map(|s| s.applied).collect();
    assert_eq!(applied, vec![true, true, true, true, true, false]);
}

/// Negative context values abort the replay with an error
#[test]
fn test_negative_price_is_an_error() {
    let scenario = Scenario::from_json(
        r#"{ "actions": [ { "action": "set_price", "price": "-3" } ] }"#,
    )
    .unwrap();

    let result = ScenarioRunner::run(&scenario);
    assert!(matches!(result, Err(ScenarioError::Config(_))));
}

/// Report serializes to JSON with string decimals
#[test]
fn test_report_serializes() {
    let scenario = Scenario::from_json(
        r#"{
            "context": { "price": "100", "amount": "10", "side": "Buy" },
            "actions": [ { "action": "enable" } ]
        }"#,
    )
    .unwrap();
    let report = ScenarioRunner::run(&scenario).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["targets"][0]["target_price"], "102");
    assert_eq!(json["enabled"], true);
    assert!(json["last_validation"].is_null());
}
