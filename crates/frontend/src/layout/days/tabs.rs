use crate::layout::days::tab::DayTab;
use crate::layout::global_context::DayNavigatorContext;
use crate::shared::dom::{touch_x, DayEntry};
use leptos::ev;
use leptos::prelude::*;

/// Tab strip. Also the swipe surface: a horizontal swipe anywhere on it
/// moves to the neighbouring day.
#[component]
pub fn DayTabs(entries: Vec<DayEntry>) -> impl IntoView {
    let ctx = leptos::context::use_context::<DayNavigatorContext>()
        .expect("DayNavigatorContext context not found");

    let on_touch_start = move |ev: ev::TouchEvent| {
        if let Some(x) = touch_x(&ev) {
            ctx.begin_touch(x);
        }
    };

    // Touches ending on a tab are finished by the tab itself
    let on_touch_end = move |ev: ev::TouchEvent| {
        if let Some(x) = touch_x(&ev) {
            if ctx.finish_touch(x, None) {
                ev.prevent_default();
            }
        }
    };

    let on_touch_cancel = move |_: ev::TouchEvent| ctx.cancel_touch();

    view! {
        <div
            class="day-tabs"
            role="tablist"
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <For
                each=move || entries.clone()
                key=|entry| entry.day
                children=move |entry: DayEntry| {
                    view! { <DayTab entry=entry /> }
                }
            />
        </div>
    }
}
