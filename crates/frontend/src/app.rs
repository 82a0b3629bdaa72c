use crate::layout::days::DayNavigator;
use crate::layout::global_context::DayNavigatorContext;
use crate::shared::dom;
use crate::system::url_state;
use contracts::domain::day_navigator::{DayId, NavigatorState};
use contracts::shared::{NavigatorConfig, NavigatorResult};
use leptos::prelude::*;
use std::cell::Cell;

thread_local! {
    static NAVIGATOR: Cell<Option<DayNavigatorContext>> = const { Cell::new(None) };
}

/// Make the mounted navigator reachable from `select_day`
pub fn register(ctx: DayNavigatorContext) {
    NAVIGATOR.with(|slot| slot.set(Some(ctx)));
}

pub fn select_day(day: DayId) {
    match NAVIGATOR.with(Cell::get) {
        Some(ctx) => ctx.select_day(day),
        None => log::debug!("select_day({}) before the navigator was mounted", day),
    }
}

/// Discover the day panels in the page and mount the tab strip next to them.
///
/// A page without day panels is left untouched.
pub fn mount_day_navigator(config: NavigatorConfig) {
    if let Err(err) = try_mount(config) {
        log::debug!("Day navigator not mounted: {}", err);
    }
}

fn try_mount(config: NavigatorConfig) -> NavigatorResult<()> {
    let markup = dom::discover(&config)?;
    let preferred = config
        .url_param
        .as_deref()
        .and_then(url_state::read_day)
        .or(config.initial_day.map(DayId::new));
    let state = NavigatorState::new(markup.days, preferred)?;
    let entries = markup.entries;

    log::info!(
        "Mounting day navigator: {} days, starting on day {}",
        state.days().len(),
        state.current_day()
    );

    leptos::mount::mount_to(markup.mount_point, move || {
        view! { <DayNavigator state=state entries=entries config=config /> }
    })
    .forget();
    Ok(())
}
