use crate::sim::{ScenarioSpec, SimError};

#[test]
fn parses_full_scenario_json() {
    let raw = r#"
{
    "meta": { "source": "acceptance", "description": "baseline machine" },
    "maintenance_period": 1000.0,
    "maintenance_duration": 2.0,
    "shape": 1.8,
    "scale": 900.0,
    "replications": 200,
    "commands": [240.0, 120.0, 80.0],
    "seed": 7
}
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    assert_eq!(spec.seed, Some(7));
    assert_eq!(spec.meta.as_ref().and_then(|m| m.source.as_deref()), Some("acceptance"));

    let (params, commands, r) = spec.validate().expect("valid scenario");
    assert_eq!(params.maintenance_period(), 1000.0);
    assert_eq!(commands.len(), 3);
    assert_eq!(r, 200);
}

#[test]
fn meta_and_seed_are_optional() {
    let raw = r#"
{
    "maintenance_period": 500.0,
    "maintenance_duration": 0.0,
    "shape": 1.0,
    "scale": 100.0,
    "replications": 10,
    "commands": [50.0]
}
    "#;
    let spec: ScenarioSpec = serde_json::from_str(raw).expect("parse scenario");
    assert!(spec.meta.is_none());
    assert!(spec.seed.is_none());
    spec.validate().expect("valid scenario");
}

#[test]
fn validation_rejects_out_of_domain_fields() {
    let mut spec = ScenarioSpec::default();
    spec.shape = -1.0;
    assert!(matches!(
        spec.validate(),
        Err(SimError::InvalidParameter { name: "shape", .. })
    ));

    let mut spec = ScenarioSpec::default();
    spec.replications = 0;
    assert!(matches!(
        spec.validate(),
        Err(SimError::InvalidParameter {
            name: "replications",
            ..
        })
    ));

    let mut spec = ScenarioSpec::default();
    spec.commands = vec![100.0, -1.0];
    assert!(matches!(
        spec.validate(),
        Err(SimError::InvalidCommandSequence(_))
    ));
}

#[test]
fn default_scenario_is_a_valid_baseline() {
    let spec = ScenarioSpec::default();
    assert_eq!(spec.maintenance_period, 1000.0);
    assert_eq!(spec.maintenance_duration, 2.0);
    assert_eq!(spec.shape, 1.8);
    assert_eq!(spec.scale, 900.0);
    assert_eq!(spec.replications, 1000);
    assert_eq!(spec.commands.len(), 10);
    spec.validate().expect("baseline is valid");
}

#[test]
fn scenario_round_trips_through_json() {
    let spec = ScenarioSpec::default();
    let raw = serde_json::to_string(&spec).expect("serialize");
    let back: ScenarioSpec = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back.commands, spec.commands);
    assert_eq!(back.replications, spec.replications);
}
