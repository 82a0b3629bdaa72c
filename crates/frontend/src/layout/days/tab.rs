use crate::layout::global_context::DayNavigatorContext;
use crate::shared::dom::{self, touch_x, DayEntry};
use contracts::domain::day_navigator::{ArrowKey, NavInput, TabView};
use leptos::ev;
use leptos::prelude::*;

/// CSS classes of a tab for its current selection and feedback state
pub fn tab_class(active_class: &str, selected: bool, pressed: bool, hovered: bool) -> String {
    let mut class = String::from("day-tab");
    if selected {
        class.push(' ');
        class.push_str(active_class);
    }
    if pressed {
        class.push_str(" pressed");
    }
    if hovered && !selected {
        class.push_str(" hovered");
    }
    class
}

#[component]
pub fn DayTab(entry: DayEntry) -> impl IntoView {
    let ctx = leptos::context::use_context::<DayNavigatorContext>()
        .expect("DayNavigatorContext context not found");

    let day = entry.day;
    let node_ref = NodeRef::<leptos::html::Button>::new();
    let pressed = RwSignal::new(false);
    let hovered = RwSignal::new(false);

    let tab = Memo::new(move |_| ctx.view.with(|view| view.tab(day).cloned()));
    let selected = move || tab.with(|t| t.as_ref().is_some_and(|t| t.selected));
    let (dom_id, aria_label) = tab
        .with_untracked(|t| t.as_ref().map(|t| (t.dom_id.clone(), t.aria_label.clone())))
        .unwrap_or_default();
    let active_class = ctx.config.with_value(|c| c.active_class.clone());

    // Arrow navigation moves focus to the newly selected tab
    Effect::new(move |_| {
        if ctx.focused.get() == Some(day) {
            if let Some(button) = node_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let on_click = move |_: ev::MouseEvent| ctx.dispatch(NavInput::Tap(day));

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if let Some(key) = ArrowKey::from_key(&ev.key()) {
            ev.prevent_default();
            ctx.arrow(key, day, dom::text_direction());
        }
    };

    let on_touch_start = move |_: ev::TouchEvent| {
        if ctx.layout.is_touch() {
            pressed.set(true);
        }
    };

    // preventDefault keeps the browser from firing a click for the same tap
    let on_touch_end = move |ev: ev::TouchEvent| {
        pressed.set(false);
        ev.prevent_default();
        ev.stop_propagation();
        match touch_x(&ev) {
            Some(x) => {
                ctx.finish_touch(x, Some(day));
            }
            None => ctx.dispatch(NavInput::Tap(day)),
        }
    };

    let on_touch_cancel = move |_: ev::TouchEvent| pressed.set(false);

    let on_mouse_enter = move |_: ev::MouseEvent| {
        if !ctx.layout.is_touch() {
            hovered.set(true);
        }
    };
    let on_mouse_leave = move |_: ev::MouseEvent| hovered.set(false);

    view! {
        <button
            type="button"
            node_ref=node_ref
            id=dom_id
            class=move || tab_class(&active_class, selected(), pressed.get(), hovered.get())
            role="tab"
            data-day=day.to_string()
            aria-label=aria_label
            aria-selected=move || tab.with(|t| t.as_ref().map(TabView::aria_selected).unwrap_or("false"))
            tabindex=move || tab.with(|t| t.as_ref().map(TabView::tab_index).unwrap_or("-1"))
            on:click=on_click
            on:keydown=on_keydown
            on:focus=move |_| ctx.focused.set(Some(day))
            on:blur=move |_| ctx.focused.set(None)
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
            on:mouseenter=on_mouse_enter
            on:mouseleave=on_mouse_leave
        >
            {entry.label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class_selected() {
        assert_eq!(tab_class("active", true, false, false), "day-tab active");
        assert_eq!(tab_class("is-current", true, false, false), "day-tab is-current");
    }

    #[test]
    fn test_tab_class_feedback() {
        assert_eq!(tab_class("active", false, true, false), "day-tab pressed");
        assert_eq!(tab_class("active", false, false, true), "day-tab hovered");
        // no hover highlight on the selected tab
        assert_eq!(tab_class("active", true, false, true), "day-tab active");
        assert_eq!(tab_class("active", false, false, false), "day-tab");
    }
}
