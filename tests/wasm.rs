//! Browser-target tests for the wasm boundary. Run with `wasm-pack test`
//! or `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

use reversi_engine::wasm::Session;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe_reports_true() {
    assert!(reversi_engine::wasm_ready());
}

#[wasm_bindgen_test]
fn fresh_session_snapshot_has_standard_start() {
    let session = Session::new();
    let state = session.state().unwrap();

    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert_eq!(
        field(&state, "current_player").as_string().as_deref(),
        Some("Black")
    );
    assert!(session.result().unwrap().is_null());

    let moves = js_sys::Array::from(&session.legal_moves().unwrap());
    assert_eq!(moves.length(), 4);
}

#[wasm_bindgen_test]
fn accepted_and_rejected_moves_round_trip() {
    let mut session = Session::new();

    assert!(!session.submit_move(0, 0));
    assert!(session.submit_move(2, 3));

    let state = session.state().unwrap();
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&state, "white_count").as_f64(), Some(1.0));
    assert_eq!(
        field(&state, "current_player").as_string().as_deref(),
        Some("White")
    );

    session.reset();
    let state = session.state().unwrap();
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
}
