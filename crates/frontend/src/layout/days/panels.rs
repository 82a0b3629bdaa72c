use crate::layout::global_context::DayNavigatorContext;
use crate::shared::dom;
use contracts::domain::day_navigator::{DayId, NavigatorView, PanelView};
use contracts::shared::NavigatorConfig;
use leptos::prelude::*;
use web_sys::Element;

/// Pair every panel found in the page with the attributes of its day.
///
/// Several panels may share a day; each of them gets the same view. Panels
/// whose day is not in the view are left out.
pub fn pair_panels<'a, T>(
    view: &'a NavigatorView,
    panels: &'a [(DayId, T)],
) -> Vec<(&'a T, &'a PanelView)> {
    panels
        .iter()
        .filter_map(|(day, panel)| view.panel(*day).map(|attrs| (panel, attrs)))
        .collect()
}

/// Apply panel visibility whenever the selection changes.
///
/// Panels are static page markup, so they are updated in place. Panels that
/// have gone missing are simply not found.
pub fn sync_panels(ctx: DayNavigatorContext) {
    Effect::new(move |_| {
        let config = ctx.config.get_value();
        let panels: Vec<(DayId, Element)> = match dom::query_all(&config.panel_selector) {
            Ok(elements) => elements
                .into_iter()
                .filter_map(|element| dom::day_of(&element).ok().map(|day| (day, element)))
                .collect(),
            Err(err) => {
                log::debug!("Day panels not updated: {}", err);
                Vec::new()
            }
        };
        ctx.view.with(|view| {
            for (element, attrs) in pair_panels(view, &panels) {
                apply_panel(&config, element, attrs);
            }
        });
    });
}

fn apply_panel(config: &NavigatorConfig, element: &Element, panel: &PanelView) {
    let _ = element
        .class_list()
        .toggle_with_force(&config.active_class, panel.visible);
    let _ = element.set_attribute("role", "tabpanel");
    let _ = element.set_attribute("aria-labelledby", &panel.labelled_by);
    let _ = element.set_attribute("aria-hidden", panel.aria_hidden());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::day_navigator::{render, DaySet, NavigatorState};

    #[test]
    fn test_duplicate_day_panels_all_follow_selection() {
        let mut state = NavigatorState::new(DaySet::new((1..=3).map(DayId::new)), None).unwrap();
        state.select_day(DayId(2));
        let view = render(&state, "Day");

        let panels = [
            (DayId(1), "intro"),
            (DayId(2), "day-2-main"),
            (DayId(2), "day-2-map"),
            (DayId(3), "outro"),
        ];
        let paired: Vec<(&str, bool)> = pair_panels(&view, &panels)
            .into_iter()
            .map(|(name, attrs)| (*name, attrs.visible))
            .collect();
        assert_eq!(
            paired,
            vec![
                ("intro", false),
                ("day-2-main", true),
                ("day-2-map", true),
                ("outro", false),
            ]
        );
    }

    #[test]
    fn test_panels_outside_view_are_skipped() {
        let state = NavigatorState::new(DaySet::new([DayId(1)]), None).unwrap();
        let view = render(&state, "Day");
        let panels = [(DayId(1), 'a'), (DayId(8), 'b')];
        let paired = pair_panels(&view, &panels);
        assert_eq!(paired.len(), 1);
        assert_eq!(*paired[0].0, 'a');
    }
}
