// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! WebAssembly entry point binding the controller to the live document.

use super::controller::{
    self, Dom, CHARACTER_COUNTERS, HIDDEN_CLASS, LOGIN_FORM, NAV_LINKS, NOTIFICATION_BUTTON,
    PROFILE_FORM, PROFILE_IMAGE_INPUT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FileReader, HtmlImageElement, HtmlInputElement, Window};

/// Form control types left out of a submitted profile.
const SKIPPED_INPUT_TYPES: [&str; 4] = ["file", "submit", "button", "reset"];

#[derive(Clone)]
struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl Dom for WebDom {
    fn set_hidden(&mut self, id: &str, hidden: bool) {
        let Some(element) = self.element(id) else {
            return;
        };
        let classes = element.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    }

    fn is_hidden(&self, id: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.class_list().contains(HIDDEN_CLASS))
    }

    fn input_value(&self, id: &str) -> Option<String> {
        string_property(&self.element(id)?, "value")
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn set_image_source(&mut self, id: &str, src: &str) {
        if let Some(image) = self
            .element(id)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        {
            image.set_src(src);
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            web_sys::console::error_1(&e);
        }
    }

    fn log(&mut self, message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }
}

fn string_property(element: &Element, name: &str) -> Option<String> {
    js_sys::Reflect::get(element, &JsValue::from_str(name))
        .ok()?
        .as_string()
}

fn bool_property(element: &Element, name: &str) -> bool {
    js_sys::Reflect::get(element, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Attach `handler` to `target` for the lifetime of the page.
fn listen(
    target: &Element,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Name/value pairs of a form's controls, as a browser would submit them.
fn form_fields(form: &Element) -> Vec<(String, String)> {
    let Ok(nodes) = form.query_selector_all("input[name], textarea[name], select[name]") else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(name) = element.get_attribute("name") else {
            continue;
        };

        let kind = element
            .get_attribute("type")
            .unwrap_or_default()
            .to_ascii_lowercase();
        if SKIPPED_INPUT_TYPES.contains(&kind.as_str()) {
            continue;
        }
        if (kind == "checkbox" || kind == "radio") && !bool_property(&element, "checked") {
            continue;
        }

        if let Some(value) = string_property(&element, "value") {
            fields.push((name, value));
        }
    }
    fields
}

/// Read the first selected file as a data URL and preview it when done.
fn preview_selected_image(dom: &WebDom, input: &Element) -> Result<(), JsValue> {
    let input: HtmlInputElement = input.clone().dyn_into()?;
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    let reader = FileReader::new()?;
    let result_reader = reader.clone();
    let mut dom = dom.clone();
    let onload = Closure::<dyn FnMut()>::new(move || {
        if let Some(data_url) = result_reader.result().ok().and_then(|r| r.as_string()) {
            controller::handle_image_loaded(&mut dom, &data_url);
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    reader.read_as_data_url(&file)
}

/// Wire every listener. Missing elements are skipped.
fn init() -> Result<(), JsValue> {
    let dom = WebDom::new().ok_or_else(|| JsValue::from_str("document unavailable"))?;

    for (link_id, _) in NAV_LINKS {
        if let Some(link) = dom.element(link_id) {
            let mut dom = dom.clone();
            listen(&link, "click", move |event| {
                if controller::handle_nav_click(&mut dom, link_id) {
                    event.prevent_default();
                }
            })?;
        }
    }

    if let Some(form) = dom.element(LOGIN_FORM) {
        let mut dom = dom.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            controller::handle_login_submit(&mut dom);
        })?;
    }

    if let Some(form) = dom.element(PROFILE_FORM) {
        let mut dom = dom.clone();
        let target = form.clone();
        listen(&form, "submit", move |event| {
            event.prevent_default();
            controller::handle_profile_submit(&mut dom, form_fields(&target));
        })?;
    }

    for (field_id, _) in CHARACTER_COUNTERS {
        if let Some(field) = dom.element(field_id) {
            let mut dom = dom.clone();
            listen(&field, "input", move |_| {
                controller::handle_counter_input(&mut dom, field_id);
            })?;
        }
    }

    if let Some(input) = dom.element(PROFILE_IMAGE_INPUT) {
        let dom = dom.clone();
        let target = input.clone();
        listen(&input, "change", move |_| {
            if let Err(e) = preview_selected_image(&dom, &target) {
                web_sys::console::error_1(&e);
            }
        })?;
    }

    if let Some(button) = dom.element(NOTIFICATION_BUTTON) {
        let mut dom = dom.clone();
        listen(&button, "click", move |_| {
            controller::toggle_notification_dot(&mut dom);
        })?;
    }

    Ok(())
}

/// Module entry: initialize once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?;
    if ready_state.as_string().as_deref() != Some("loading") {
        return init();
    }

    let on_ready = Closure::<dyn FnMut()>::new(|| {
        if let Err(e) = init() {
            web_sys::console::error_1(&e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
