pub mod app;
pub mod layout;
pub mod shared;
pub mod system;

use contracts::domain::day_navigator::DayId;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = system::config::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(system::config::log_level(&config.log_level));
    console_error_panic_hook::set_once();

    if let Err(err) = &loaded {
        log::warn!("Falling back to the default navigator config: {}", err);
    }

    system::error_log::install();
    system::modality::install();
    app::mount_day_navigator(config);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Select a day from page scripts. Unknown days and an unmounted navigator are ignored.
#[wasm_bindgen(js_name = selectDay)]
pub fn select_day(day: u32) {
    app::select_day(DayId::new(day));
}
