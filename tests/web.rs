// Browser tests for the wasm exports. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mount_then_start_and_restart() {
    // A failed mount must leave nothing behind, so a later mount still works.
    let doc = web_sys::window().unwrap().document().unwrap();
    let div = doc.create_element("div").unwrap();
    div.set_id("mf-not-a-canvas");
    doc.body().unwrap().append_child(&div).unwrap();
    assert!(monad_flap::mount_game(Some("mf-not-a-canvas".to_string())).is_err());
    assert!(monad_flap::init_game().is_err());
    assert!(monad_flap::start_game().is_err());

    monad_flap::mount_game(Some("mf-test-canvas".to_string())).unwrap();
    assert!(doc.get_element_by_id("mf-test-canvas").is_some());

    assert!(!monad_flap::is_game_running());
    monad_flap::start_game().unwrap();
    assert!(monad_flap::is_game_running());
    assert!(!monad_flap::is_game_over());

    monad_flap::restart_game().unwrap();
    assert!(monad_flap::is_game_running());
    assert_eq!(monad_flap::game_score(), 0);

    // Second mount keeps the running session.
    monad_flap::mount_game(None).unwrap();
    assert!(monad_flap::is_game_running());
}
