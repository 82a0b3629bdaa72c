use contracts::shared::InputModality;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

fn apply(modality: InputModality) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body());
    if let Some(body) = body {
        let _ = body
            .class_list()
            .toggle_with_force(InputModality::KEYBOARD_CLASS, modality.is_keyboard());
    }
}

/// Track keyboard vs pointer use on the whole page and mirror it as a body class
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let current = Rc::new(Cell::new(InputModality::default()));

    let on_keydown = {
        let current = current.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                let next = current.get().after_key(&keyboard_event.key());
                if next != current.get() {
                    current.set(next);
                    apply(next);
                }
            }
        }) as Box<dyn FnMut(_)>)
    };

    let on_mousedown = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let next = current.get().after_pointer_down();
        if next != current.get() {
            current.set(next);
            apply(next);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    let _ = document
        .add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref());
    on_keydown.forget();
    on_mousedown.forget();
}
