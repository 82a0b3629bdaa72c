use serde::{Deserialize, Serialize};

use super::error::NavigatorResult;

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"{
    "swipe_threshold_px": 50.0,
    "scroll_margin_px": 30.0,
    "touch_breakpoint_px": 768.0,
    "tab_selector": ".day-tab",
    "panel_selector": ".day-card",
    "header_id": "navbar",
    "sub_header_id": "daysNavbar",
    "active_class": "active",
    "aria_label_prefix": "اليوم",
    "initial_day": null,
    "url_param": null,
    "log_level": "debug"
}"#;

/// Настройки навигатора по дням.
///
/// Every field has a default, so a page config only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Minimal horizontal travel (px) for a touch to count as a swipe
    pub swipe_threshold_px: f64,
    /// Gap left between the sub-header and the top of the selected panel
    pub scroll_margin_px: f64,
    /// Viewports at or below this width get touch feedback instead of hover
    pub touch_breakpoint_px: f64,
    pub tab_selector: String,
    pub panel_selector: String,
    pub header_id: String,
    pub sub_header_id: String,
    pub active_class: String,
    pub aria_label_prefix: String,
    pub initial_day: Option<u32>,
    /// Query-string key mirrored on selection; `None` disables URL sync
    pub url_param: Option<String>,
    pub log_level: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
            scroll_margin_px: 30.0,
            touch_breakpoint_px: 768.0,
            tab_selector: ".day-tab".to_string(),
            panel_selector: ".day-card".to_string(),
            header_id: "navbar".to_string(),
            sub_header_id: "daysNavbar".to_string(),
            active_class: "active".to_string(),
            aria_label_prefix: "اليوم".to_string(),
            initial_day: None,
            url_param: None,
            log_level: "debug".to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Parse a JSON config, filling missing keys with defaults
    pub fn from_json(json: &str) -> NavigatorResult<Self> {
        let config: NavigatorConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Config embedded in the bundle
    pub fn embedded() -> NavigatorResult<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// Selector matching the panel of one day
    pub fn panel_selector_for(&self, day: u32) -> String {
        format!("{}[data-day=\"{}\"]", self.panel_selector, day)
    }
}
