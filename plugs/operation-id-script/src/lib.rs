//! Framework-free operation viewer: one button, one fetch, one text node.

use gloo::console;
use gloo::events::EventListener;
use hmi_core::view::SCRIPT_FETCH_FAILED;
use hmi_core::{HmiClient, HmiConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

const BUTTON_ID: &str = "load-operation-id";
const OUTPUT_ID: &str = "operation-id";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let button = document
        .get_element_by_id(BUTTON_ID)
        .ok_or("missing #load-operation-id")?;
    let output = document
        .get_element_by_id(OUTPUT_ID)
        .ok_or("missing #operation-id")?;

    // Same-origin, document-relative requests; this page has no prefix.
    let client = HmiClient::new(HmiConfig::relative());

    EventListener::new(&button, "click", move |_| {
        let output = output.clone();
        let client = client.clone();
        spawn_local(async move {
            let text = client
                .latest_operation_text(|e| console::error!(SCRIPT_FETCH_FAILED, e.to_string()))
                .await;
            output.set_text_content(Some(&text));
        });
    })
    .forget();

    Ok(())
}
