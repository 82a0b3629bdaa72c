use crate::shared::dom;
use contracts::domain::day_navigator::{scroll_target, DayId, ScrollMetrics};
use contracts::shared::{NavigatorConfig, NavigatorResult};
use leptos::prelude::request_animation_frame;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Smooth-scroll the panel of `day` below the fixed headers.
///
/// Runs on the next animation frame so the panel and header sizes reflect
/// the selection that was just rendered.
pub fn scroll_to_panel(config: NavigatorConfig, day: DayId) {
    request_animation_frame(move || {
        if let Err(err) = scroll_now(&config, day) {
            log::debug!("Scroll to day {} skipped: {}", day, err);
        }
    });
}

fn scroll_now(config: &NavigatorConfig, day: DayId) -> NavigatorResult<()> {
    let window = dom::window()?;
    let panel = dom::find_panel(config, day)?;
    let metrics = ScrollMetrics {
        panel_top: panel.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0),
        header_height: dom::element_height(&config.header_id),
        sub_header_height: dom::element_height(&config.sub_header_id),
        margin: config.scroll_margin_px,
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(&metrics));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}
