use slime_engine::{SimConfig, SimError, SimulationCore, SpeciesAffinity};

#[test]
fn json_config_drives_initialization() {
    let json = r#"{
        "width": 96,
        "height": 48,
        "agentCount": 300,
        "seed": 7,
        "species": [[1, 0, 0], [0, 1, 1]],
        "sensorDistance": 12.5,
        "kernelRadius": 2,
        "speciesAffinity": "ownOnly"
    }"#;
    let config = SimConfig::from_json(json).unwrap();
    let sim = SimulationCore::new(config.clone()).unwrap();

    assert_eq!((sim.width(), sim.height(), sim.agent_count()), (96, 48, 300));
    assert_eq!(sim.palette().len(), 2);
    let p = sim.params();
    assert_eq!(p.sensor_distance, 12.5);
    assert_eq!(p.kernel_radius, 2);
    assert_eq!(p.species_affinity, SpeciesAffinity::OwnOnly);
    // Untouched fields keep their defaults.
    assert_eq!(p.reduce_amount, 0.01);
    assert_eq!(sim.config(), config);
}

#[test]
fn species_are_assigned_round_robin() {
    let mut config = SimConfig::new(50, 50, 10);
    config.species = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
    let sim = SimulationCore::new(config).unwrap();
    for a in sim.agents().iter() {
        assert_eq!(a.species as u32, a.index % 4);
    }
}

#[test]
fn invalid_configs_fail_before_allocation() {
    let bad = [
        r#"{"width": 0}"#,
        r#"{"agentCount": 0}"#,
        r#"{"species": []}"#,
        r#"{"species": [[0,0,1],[0,1,0],[1,0,0],[1,1,0],[0,1,1],[1,0,1],[1,1,1],[0,0,0],[0.5,0.5,0.5]]}"#,
        r#"{"species": [[0, 0, 2]]}"#,
        r#"{"diffusionAmount": 1.01}"#,
        r#"{"sensorAngle": 3.5}"#,
        r#"{"kernelRadius": 100}"#,
        r#"{"speciesAffinity": "hostile"}"#,
        r#""just a string""#,
    ];
    for json in bad {
        assert!(SimConfig::from_json(json).is_err(), "accepted {json}");
    }
}

#[test]
fn too_many_species_names_the_limit() {
    let mut config = SimConfig::new(10, 10, 10);
    config.species = vec![[0.0, 0.0, 1.0]; 9];
    assert!(matches!(
        SimulationCore::new(config),
        Err(SimError::SpeciesCount { count: 9, max: 8 })
    ));
}

#[test]
fn config_round_trips_through_json() {
    let mut sim = SimulationCore::new(SimConfig::new(30, 20, 10)).unwrap();
    sim.set_speed(2.5).unwrap();
    sim.set_paused(true);
    let json = sim.config().to_json().unwrap();
    assert!(json.contains("\"paused\":true"));
    let restored = SimConfig::from_json(&json).unwrap();
    assert_eq!(restored, sim.config());
}
