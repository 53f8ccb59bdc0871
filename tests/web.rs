//! Browser smoke tests: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use slime_engine::SlimeWorld;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_and_composes() {
    slime_engine::init();
    let mut world = SlimeWorld::new(64, 32, 500).unwrap();
    world.step();
    assert_eq!(world.frame(), 1);
    assert_eq!(world.compose_pixels(), 64 * 32);
}

#[wasm_bindgen_test]
fn setters_surface_errors_as_js_values() {
    let mut world = SlimeWorld::new(16, 16, 10).unwrap();
    assert!(world.set_reduce_amount(2.0).is_err());
    assert!(world.set_species_affinity("hostile").is_err());
    assert!(world.set_species_affinity("indifferent").is_ok());
    assert!(SlimeWorld::from_config_json("{\"width\": 0}").is_err());
}

#[wasm_bindgen_test]
fn config_json_round_trips() {
    let mut world = SlimeWorld::new(16, 16, 10).unwrap();
    world.set_paused(true);
    let json = world.config_json().unwrap();
    assert!(world.apply_config_json(&json).is_ok());
    assert!(world.paused());
}

#[wasm_bindgen_test]
fn partial_json_update_keeps_frozen_fields() {
    slime_engine::init();
    let mut world = SlimeWorld::new(64, 64, 10).unwrap();
    assert!(world.apply_config_json("{\"reduceAmount\": 0.5}").is_ok());
    assert_eq!((world.width(), world.height()), (64, 64));
    assert!(log::log_enabled!(log::Level::Info));
}
