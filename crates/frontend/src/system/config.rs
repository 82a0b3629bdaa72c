use crate::shared::dom;
use contracts::shared::{NavigatorConfig, NavigatorResult};
use std::str::FromStr;

/// Id of the optional `<script type="application/json">` element holding config overrides
pub const CONFIG_ELEMENT_ID: &str = "day-navigator-config";

/// Load the navigator config from the page.
///
/// Without a config element the embedded default is used.
pub fn load_config() -> NavigatorResult<NavigatorConfig> {
    let overrides = dom::document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    match overrides {
        Some(json) if !json.trim().is_empty() => NavigatorConfig::from_json(&json),
        _ => NavigatorConfig::embedded(),
    }
}

/// Map the configured level name, defaulting to `Debug`
pub fn log_level(name: &str) -> log::Level {
    log::Level::from_str(name.trim()).unwrap_or(log::Level::Debug)
}
