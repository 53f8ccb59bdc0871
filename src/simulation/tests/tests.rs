use super::*;
use crate::core::field::SATURATION;
use std::f32::consts::PI;

fn small(width: u32, height: u32, agents: u32) -> SimulationCore {
    SimulationCore::new(SimConfig::new(width, height, agents)).unwrap()
}

#[test]
fn phases_follow_idle_stepping_presenting() {
    let mut sim = small(32, 32, 10);
    assert_eq!(sim.phase(), FramePhase::Idle);
    assert_eq!(sim.step(), FramePhase::Presenting);
    assert_eq!(sim.frame(), 1);
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.tick(), FramePhase::Presenting);
    assert_eq!(sim.frame(), 2);
    assert_eq!(sim.presented(), 2);
}

#[test]
fn paused_ticks_freeze_agents_and_trail() {
    let mut sim = small(48, 48, 50);
    sim.step();
    let agents: Vec<_> = sim.agents().iter().copied().collect();
    let trail = sim.trail().clone();

    sim.set_paused(true);
    for _ in 0..3 {
        assert_eq!(sim.step(), FramePhase::Presenting);
    }
    assert_eq!(sim.frame(), 1);
    assert_eq!(sim.presented(), 4);
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.agents().as_slice(), agents.as_slice());
    assert_eq!(sim.trail(), &trail);

    sim.set_paused(false);
    sim.step();
    assert_eq!(sim.frame(), 2);
}

#[test]
fn step_swaps_in_the_diffused_generation() {
    let mut sim = small(40, 40, 1);
    sim.set_reduce_amount(0.5).unwrap();
    sim.set_diffusion_amount(0.0).unwrap();
    sim.set_draw_strength(0.0).unwrap();
    sim.trail_mut().fill([0.8, 0.8, 0.8]);
    sim.step();
    // No deposit weight, no blur: every cell simply halves.
    let (lo, hi) = sim.trail().value_range();
    assert!((lo - 0.4).abs() < 1e-6 && (hi - 0.4).abs() < 1e-6);
}

#[test]
fn deposits_show_up_in_the_instant_view() {
    let mut sim = small(64, 64, 200);
    sim.step();
    let total = sim.deposits().total_intensity();
    // Default palette: every species deposits exactly one unit.
    assert!((total - 200.0).abs() < 1e-6);
    assert_eq!(sim.view(), TrailView::Accumulated);
    sim.set_show_trails(false);
    assert_eq!(sim.view(), TrailView::Instant);
}

#[test]
fn field_stays_in_range_under_heavy_deposits() {
    let mut config = SimConfig::new(16, 16, 2000);
    config.draw_strength = 1.0;
    config.reduce_amount = 0.0;
    let mut sim = SimulationCore::new(config).unwrap();
    for _ in 0..10 {
        sim.step();
        let (lo, hi) = sim.trail().value_range();
        assert!(lo >= 0.0 && hi <= SATURATION);
    }
}

#[test]
fn setters_validate_and_keep_old_value() {
    let mut sim = small(16, 16, 4);
    assert!(sim.set_reduce_amount(1.5).is_err());
    assert!(sim.set_sensor_angle(f32::NAN).is_err());
    assert!(sim.set_sensor_distance(-3.0).is_err());
    assert!(sim.set_speed(f32::INFINITY).is_err());
    assert!(sim.set_kernel_radius(33).is_err());
    assert_eq!(sim.params(), SimParams::default());

    sim.set_max_turn(PI / 4.0).unwrap();
    sim.set_kernel_radius(0).unwrap();
    sim.set_species_affinity(SpeciesAffinity::Indifferent);
    let p = sim.params();
    assert_eq!(p.max_turn, PI / 4.0);
    assert_eq!(p.kernel_radius, 0);
    assert_eq!(p.species_affinity, SpeciesAffinity::Indifferent);
}

#[test]
fn frozen_fields_reject_changes() {
    let mut sim = small(20, 10, 5);
    assert!(sim.resize(20, 10).is_ok());
    assert_eq!(
        sim.resize(40, 10),
        Err(SimError::Frozen { what: "width", current: 20, requested: 40 })
    );
    assert!(sim.set_agent_count(5).is_ok());
    assert!(matches!(sim.set_agent_count(6), Err(SimError::Frozen { what: "agent count", .. })));

    let mut config = sim.config();
    config.height = 11;
    assert!(matches!(sim.apply_config(&config), Err(SimError::Frozen { what: "height", .. })));

    let mut config = sim.config();
    config.species.push([1.0, 1.0, 1.0]);
    assert!(matches!(sim.apply_config(&config), Err(SimError::Frozen { what: "species count", .. })));
}

#[test]
fn apply_config_is_all_or_nothing() {
    let mut sim = small(20, 10, 5);
    let mut config = sim.config();
    config.speed = 3.0;
    config.reduce_amount = 2.0;
    assert!(sim.apply_config(&config).is_err());
    assert_eq!(sim.params().speed, 1.0);

    config.reduce_amount = 0.3;
    config.species[0] = [1.0, 1.0, 0.0];
    sim.apply_config(&config).unwrap();
    assert_eq!(sim.params().speed, 3.0);
    assert_eq!(sim.palette().color(0), [1.0, 1.0, 0.0]);
    assert_eq!(sim.config(), config);
}

#[test]
fn partial_json_update_touches_only_named_fields() {
    let mut sim = small(64, 64, 5);
    sim.set_speed(2.0).unwrap();
    sim.apply_config_json(r#"{"reduceAmount": 0.5}"#).unwrap();
    assert_eq!(sim.params().reduce_amount, 0.5);
    assert_eq!(sim.params().speed, 2.0);
    assert_eq!((sim.width(), sim.height()), (64, 64));

    assert!(matches!(
        sim.apply_config_json(r#"{"width": 128}"#),
        Err(SimError::Frozen { what: "width", .. })
    ));
    assert!(sim.apply_config_json(r#"{"diffusionAmount": -1}"#).is_err());
    assert_eq!(sim.params().diffusion_amount, SimParams::default().diffusion_amount);
}

#[test]
fn species_colour_edit_does_not_disturb_held_snapshots() {
    let mut sim = small(8, 8, 3);
    let held = sim.palette();
    sim.set_species_color(1, [0.5, 0.5, 0.5]).unwrap();
    assert_eq!(held.color(1), [0.0, 1.0, 0.0]);
    assert_eq!(sim.palette().color(1), [0.5, 0.5, 0.5]);
    assert!(matches!(
        sim.set_species_color(7, [0.0, 0.0, 0.0]),
        Err(SimError::UnknownSpecies { index: 7, count: 3 })
    ));
}

#[test]
fn agent_pose_must_be_inside_the_field() {
    let mut sim = small(10, 10, 2);
    sim.set_agent_pose(1, Vec2::new(9.5, 0.0), -PI).unwrap();
    let a = sim.agents().get(1).unwrap();
    assert_eq!(a.position, Vec2::new(9.5, 0.0));
    assert!((a.heading - PI).abs() < 1e-5);
    assert!(sim.set_agent_pose(0, Vec2::new(10.0, 5.0), 0.0).is_err());
    assert!(sim.set_agent_pose(0, Vec2::new(5.0, -0.1), 0.0).is_err());
    assert!(sim.set_agent_pose(0, Vec2::new(5.0, 5.0), f32::NAN).is_err());
    assert!(sim.set_agent_pose(2, Vec2::new(5.0, 5.0), 0.0).is_err());
}

#[test]
fn compose_pixels_follows_the_selected_view() {
    let mut sim = small(4, 4, 1);
    sim.trail_mut().set(1, 0, [1.0, 0.0, 0.0]);
    let px = sim.compose_pixels();
    assert_eq!(px.len(), 16);
    assert_eq!(px[1], 0xFF00_00FF);
    assert_eq!(px[0], 0xFF00_0000);

    sim.set_show_trails(false);
    let px = sim.compose_pixels();
    // Nothing deposited before the first tick.
    assert!(px.iter().all(|&p| p == 0xFF00_0000));
}

#[test]
fn perf_stats_fill_only_when_enabled() {
    let mut sim = small(32, 32, 100);
    sim.step();
    assert_eq!(sim.get_perf_stats().agents_processed(), 0);

    sim.enable_perf_metrics(true);
    sim.step();
    let stats = sim.get_perf_stats();
    assert_eq!(stats.agents_processed(), 100);
    assert_eq!(stats.cells_processed(), 32 * 32);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.total_intensity() > 0.0);
}

#[test]
fn construction_reports_bad_config() {
    assert!(matches!(
        SimulationCore::new(SimConfig::new(0, 5, 5)),
        Err(SimError::EmptyField { .. })
    ));
    assert!(matches!(SimulationCore::new(SimConfig::new(5, 5, 0)), Err(SimError::NoAgents)));
}
