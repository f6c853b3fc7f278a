#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use tempo_web::app::App;
use tempo_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
}

#[wasm_bindgen_test]
fn header_lists_every_section() {
    render_app();
    let doc = dom::document().expect("document");
    let buttons = doc
        .query_selector_all("header nav button")
        .expect("query nav");
    assert_eq!(buttons.length(), 4);
    let first: HtmlElement = buttons
        .get(0)
        .expect("first nav button")
        .dyn_into()
        .expect("html element");
    assert_eq!(first.inner_text(), "Inicio");
}
