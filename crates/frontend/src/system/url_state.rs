//! Optional mirroring of the selected day into the query string (`?day=3`).
//!
//! Only the configured key is touched: every other pair keeps its raw text
//! and position, including nested (`utm[source]=..`) and repeated keys.

use crate::layout::global_context::DayNavigatorContext;
use contracts::domain::day_navigator::DayId;
use leptos::prelude::*;
use std::borrow::Cow;
use web_sys::window;

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

fn decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

pub fn day_from_query(search: &str, param: &str) -> Option<DayId> {
    pairs(search)
        .map(split_pair)
        .find(|(key, _)| decode(key) == param)
        .and_then(|(_, value)| decode(value).parse().ok())
}

/// Query string with `param` set to `day`, other parameters kept as they were
pub fn query_with_day(search: &str, param: &str, day: DayId) -> String {
    let mut replaced = false;
    let mut out: Vec<String> = Vec::new();
    for pair in pairs(search) {
        let (key, _) = split_pair(pair);
        if decode(key) != param {
            out.push(pair.to_string());
        } else if !replaced {
            out.push(format!("{}={}", key, day));
            replaced = true;
        }
    }
    if !replaced {
        out.push(format!("{}={}", urlencoding::encode(param), day));
    }
    format!("?{}", out.join("&"))
}

/// Day requested by the current URL
pub fn read_day(param: &str) -> Option<DayId> {
    day_from_query(&current_search(), param)
}

/// Keep the URL in sync with the selected day
pub fn sync_to_url(param: String, ctx: DayNavigatorContext) {
    Effect::new(move |_| {
        let day = ctx.state.with(|s| s.current_day());
        let search = current_search();
        let new_url = query_with_day(&search, &param, day);

        // Only update URL if it actually changed
        if search != new_url {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_from_query() {
        assert_eq!(day_from_query("?day=3", "day"), Some(DayId(3)));
        assert_eq!(day_from_query("day=3&lang=ar", "day"), Some(DayId(3)));
        assert_eq!(day_from_query("?day=x", "day"), None);
        assert_eq!(day_from_query("", "day"), None);
        assert_eq!(day_from_query("?d=3", "day"), None);
        assert_eq!(day_from_query("?today=3", "day"), None);
    }

    #[test]
    fn test_day_from_query_with_nested_and_repeated_keys() {
        assert_eq!(day_from_query("?utm[source]=mail&day=4", "day"), Some(DayId(4)));
        assert_eq!(day_from_query("?tag=a&tag=b&day=6", "day"), Some(DayId(6)));
        assert_eq!(day_from_query("?utm%5Bsource%5D=mail&day=2", "day"), Some(DayId(2)));
    }

    #[test]
    fn test_query_with_day_keeps_other_params() {
        assert_eq!(query_with_day("", "day", DayId(2)), "?day=2");
        assert_eq!(query_with_day("?", "day", DayId(2)), "?day=2");
        assert_eq!(query_with_day("?day=1&lang=ar", "day", DayId(5)), "?day=5&lang=ar");
        assert_eq!(query_with_day("?lang=ar", "day", DayId(5)), "?lang=ar&day=5");
    }

    #[test]
    fn test_query_with_day_keeps_nested_repeated_and_order() {
        assert_eq!(
            query_with_day("?utm[source]=mail&day=1", "day", DayId(5)),
            "?utm[source]=mail&day=5"
        );
        assert_eq!(
            query_with_day("?tag=a&tag=b&day=1", "day", DayId(5)),
            "?tag=a&tag=b&day=5"
        );
        assert_eq!(
            query_with_day("?z=1&day=1&a=2", "day", DayId(3)),
            "?z=1&day=3&a=2"
        );
        // duplicate day keys collapse into the first one
        assert_eq!(query_with_day("?day=1&x=y&day=2", "day", DayId(4)), "?day=4&x=y");
    }
}
