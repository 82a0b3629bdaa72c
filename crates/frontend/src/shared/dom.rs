//! Lookups into the static page markup the navigator is attached to.

use contracts::domain::day_navigator::{DayId, DaySet, TextDirection};
use contracts::shared::{NavigatorConfig, NavigatorError, NavigatorResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// One tab of the strip: its day and the text shown on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: DayId,
    pub label: String,
}

/// What the page provides to the navigator
pub struct DayMarkup {
    pub days: DaySet,
    pub entries: Vec<DayEntry>,
    /// Element the tab strip is rendered into
    pub mount_point: HtmlElement,
}

pub fn window() -> NavigatorResult<Window> {
    web_sys::window().ok_or_else(|| NavigatorError::MissingElement("window".to_string()))
}

pub fn document() -> NavigatorResult<Document> {
    window()?
        .document()
        .ok_or_else(|| NavigatorError::MissingElement("document".to_string()))
}

pub fn query_all(selector: &str) -> NavigatorResult<Vec<Element>> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|_| NavigatorError::MissingElement(selector.to_string()))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn day_of(element: &Element) -> NavigatorResult<DayId> {
    element
        .get_attribute("data-day")
        .ok_or_else(|| NavigatorError::InvalidDayAttribute(String::new()))?
        .parse()
}

pub fn find_panel(config: &NavigatorConfig, day: DayId) -> NavigatorResult<HtmlElement> {
    let selector = config.panel_selector_for(day.value());
    document()?
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(NavigatorError::MissingElement(selector))
}

/// Rendered height of the element with `id`, 0 when it is absent
pub fn element_height(id: &str) -> f64 {
    document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .map(|element| element.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn text_direction() -> TextDirection {
    document()
        .map(|doc| TextDirection::from_dir(&doc.dir()))
        .unwrap_or_default()
}

pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Horizontal screen position of the touch that changed in this event
pub fn touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.changed_touches()
        .get(0)
        .map(|touch| touch.screen_x() as f64)
}

/// Collect day panels and static tabs.
///
/// Static tabs only lend their labels and position: they are removed and the
/// strip is rendered in their parent. Without static tabs the strip goes into
/// the sub-header element.
pub fn discover(config: &NavigatorConfig) -> NavigatorResult<DayMarkup> {
    let panel_days: Vec<DayId> = query_all(&config.panel_selector)?
        .iter()
        .filter_map(|panel| match day_of(panel) {
            Ok(day) => Some(day),
            Err(err) => {
                log::debug!("Skipping day panel: {}", err);
                None
            }
        })
        .collect();
    let days = DaySet::new(panel_days);
    if days.is_empty() {
        return Err(NavigatorError::EmptyDaySet);
    }

    let static_tabs = query_all(&config.tab_selector)?;
    let labels: Vec<(DayId, String)> = static_tabs
        .iter()
        .filter_map(|tab| {
            let day = day_of(tab).ok()?;
            let text = tab.text_content().unwrap_or_default();
            Some((day, text.trim().to_string()))
        })
        .collect();

    let mount_point = match static_tabs.first().and_then(|tab| tab.parent_element()) {
        Some(parent) => parent,
        None => document()?
            .get_element_by_id(&config.sub_header_id)
            .ok_or_else(|| NavigatorError::MissingElement(format!("#{}", config.sub_header_id)))?,
    }
    .dyn_into::<HtmlElement>()
    .map_err(|_| NavigatorError::MissingElement("tab strip container".to_string()))?;

    for tab in &static_tabs {
        tab.remove();
    }

    let entries = tab_entries(&days, &labels);
    Ok(DayMarkup {
        days,
        entries,
        mount_point,
    })
}

/// One entry per day in the set, labelled from the static tabs when they have text
pub fn tab_entries(days: &DaySet, labels: &[(DayId, String)]) -> Vec<DayEntry> {
    days.days()
        .iter()
        .map(|&day| {
            let label = labels
                .iter()
                .find(|(label_day, text)| *label_day == day && !text.is_empty())
                .map(|(_, text)| text.clone())
                .unwrap_or_else(|| day.to_string());
            DayEntry { day, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_entries_use_static_labels() {
        let days = DaySet::new([DayId(1), DayId(2), DayId(3)]);
        let labels = vec![
            (DayId(2), "Montjuïc".to_string()),
            (DayId(1), "Gothic Quarter".to_string()),
        ];
        let entries = tab_entries(&days, &labels);
        let texts: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(texts, vec!["Gothic Quarter", "Montjuïc", "3"]);
    }

    #[test]
    fn test_tab_entries_ignore_labels_without_panel() {
        let days = DaySet::new([DayId(1)]);
        let labels = vec![(DayId(9), "Orphan".to_string()), (DayId(1), String::new())];
        assert_eq!(
            tab_entries(&days, &labels),
            vec![DayEntry {
                day: DayId(1),
                label: "1".to_string()
            }]
        );
    }
}
