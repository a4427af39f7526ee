//! In-browser smoke checks, run with `wasm-pack test --headless` or
//! `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use novacut_landing::components::counter::display_value;
use novacut_landing::data::product::Product;
use novacut_landing::state::ContentKey;
use novacut_landing::utils::format::with_thousands;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn content_lookup_never_fails() {
    let product = Product::fallback();
    assert_eq!(ContentKey::parse("nonsense").title(&product), "Information");
    assert_eq!(
        ContentKey::parse("download").title(&product),
        "Download NovaCut Pro"
    );
}

#[wasm_bindgen_test]
fn counter_terminal_values_are_exact() {
    assert_eq!(display_value(42.0, 1.0), "42");
    assert_eq!(display_value(98.5, 1.0), "98.5");
}

#[wasm_bindgen_test]
fn seed_formats_with_separators() {
    assert_eq!(with_thousands(125_742), "125,742");
}
