pub mod panels;
pub mod tab;
pub mod tabs;

use crate::layout::global_context::DayNavigatorContext;
use crate::shared::dom::{self, DayEntry};
use crate::system::url_state;
use contracts::domain::day_navigator::{LayoutMode, NavigatorState};
use contracts::shared::NavigatorConfig;
use leptos::prelude::*;
use tabs::DayTabs;

/// Root of the day navigator.
///
/// Renders the tab strip in place and keeps the static day panels in sync
/// with the selected day.
#[component]
pub fn DayNavigator(
    state: NavigatorState,
    entries: Vec<DayEntry>,
    config: NavigatorConfig,
) -> impl IntoView {
    let layout = LayoutMode::from_viewport_width(dom::viewport_width(), config.touch_breakpoint_px);
    let url_param = config.url_param.clone();

    let ctx = DayNavigatorContext::new(state, config, layout);
    provide_context(ctx);
    crate::app::register(ctx);

    panels::sync_panels(ctx);
    if let Some(param) = url_param {
        url_state::sync_to_url(param, ctx);
    }

    view! { <DayTabs entries=entries /> }
}
