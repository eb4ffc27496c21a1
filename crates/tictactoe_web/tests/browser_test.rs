//! Drives the mounted app through the DOM. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use leptos::task::tick;
use tictactoe_core::Settings;
use tictactoe_web::{MountError, mount};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn settings(id: &str, order: &str) -> Settings {
    Settings::from_toml_str(&format!("mount_id = {:?}\norder = {:?}", id, order)).unwrap()
}

fn click(root: &Element, selector: &str, index: u32) {
    root.query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn text(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn move_texts(root: &Element) -> Vec<String> {
    let list = root.query_selector_all("ol li button").unwrap();
    (0..list.length())
        .map(|i| list.item(i).unwrap().text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
async fn test_top_row_win_highlights_line() {
    let root = fresh_root("win-root");
    mount(&settings("win-root", "ascending")).unwrap();
    tick().await;

    assert_eq!(root.query_selector_all(".board-row button").unwrap().length(), 9);
    assert_eq!(text(&root, ".status"), "Next player: X");

    for cell in [0, 3, 1, 4, 2] {
        click(&root, ".board-row button", cell);
        tick().await;
    }

    assert_eq!(text(&root, ".status"), "Winner: X");
    assert_eq!(root.query_selector_all(".square-highlight").unwrap().length(), 3);

    // Clicks after the win change nothing.
    click(&root, ".board-row button", 8);
    tick().await;
    assert_eq!(move_texts(&root).len(), 6);
}

#[wasm_bindgen_test]
async fn test_jump_and_toggle_order() {
    let root = fresh_root("order-root");
    mount(&settings("order-root", "ascending")).unwrap();
    tick().await;

    click(&root, ".board-row button", 4);
    tick().await;
    click(&root, ".board-row button", 0);
    tick().await;
    assert_eq!(
        move_texts(&root),
        vec![
            "Go to game start",
            "Go to move #1 (col 1, row 1)",
            "Go to move #2 (col 0, row 0)",
        ]
    );

    click(&root, "button.order", 0);
    tick().await;
    assert_eq!(text(&root, "button.order"), "▼");
    assert_eq!(move_texts(&root)[0], "Go to move #2 (col 0, row 0)");

    // Descending list: index 2 is game start.
    click(&root, "ol li button", 2);
    tick().await;
    assert_eq!(text(&root, ".status"), "Next player: X");
    assert_eq!(text(&root, ".move-current"), "Go to game start");
    assert_eq!(move_texts(&root).len(), 3);
}

#[wasm_bindgen_test]
fn test_missing_mount_element() {
    let err = mount(&settings("nowhere", "ascending")).unwrap_err();
    assert_eq!(err, MountError::MissingElement("nowhere".to_string()));
}
