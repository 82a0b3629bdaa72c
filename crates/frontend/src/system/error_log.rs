use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

/// Log every uncaught page error to the console logger
pub fn install() {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        match event.dyn_ref::<ErrorEvent>() {
            Some(error) => log::error!(
                "An error occurred: {} ({}:{}:{})",
                error.message(),
                error.filename(),
                error.lineno(),
                error.colno()
            ),
            None => log::error!("An error occurred: {}", event.type_()),
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
