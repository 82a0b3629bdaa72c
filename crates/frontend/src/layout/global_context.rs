use crate::shared::scroll;
use contracts::domain::day_navigator::{
    render, ArrowKey, DayId, LayoutMode, NavInput, NavigatorState, NavigatorView, Selection,
    SwipeTracker, TextDirection,
};
use contracts::shared::{NavigatorConfig, NavigatorError};
use leptos::prelude::*;

/// Brings the panel of a freshly selected day into view
pub type ScrollFn = fn(NavigatorConfig, DayId);

/// Reactive store of the day navigator, provided via context to the tab strip.
///
/// All input channels end in [`DayNavigatorContext::select_day`].
#[derive(Clone, Copy)]
pub struct DayNavigatorContext {
    pub state: RwSignal<NavigatorState>,
    /// Tab and panel attributes derived from `state`
    pub view: Memo<NavigatorView>,
    /// Tab that should hold keyboard focus
    pub focused: RwSignal<Option<DayId>>,
    pub swipe: StoredValue<SwipeTracker>,
    pub config: StoredValue<NavigatorConfig>,
    pub layout: LayoutMode,
    scroll: ScrollFn,
}

impl DayNavigatorContext {
    pub fn new(state: NavigatorState, config: NavigatorConfig, layout: LayoutMode) -> Self {
        let prefix = config.aria_label_prefix.clone();
        let state = RwSignal::new(state);
        Self {
            state,
            view: Memo::new(move |_| state.with(|s| render(s, &prefix))),
            focused: RwSignal::new(None),
            swipe: StoredValue::new(SwipeTracker::default()),
            config: StoredValue::new(config),
            layout,
            scroll: scroll::scroll_to_panel,
        }
    }

    /// Replace the scroll step run after each selection
    pub fn with_scroll(mut self, scroll: ScrollFn) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn select_day(&self, day: DayId) {
        let mut next = self.state.get_untracked();
        match next.select_day(day) {
            Selection::Ignored(day) => {
                log::debug!("select_day skipped: {}", NavigatorError::UnknownDay(day.value()));
                return;
            }
            Selection::Unchanged(_) => {}
            Selection::Changed { from, to } => {
                log::debug!("select_day: {} -> {}", from, to);
                self.state.set(next);
            }
        }
        (self.scroll)(self.config.get_value(), day);
    }

    /// Resolve an input to its target day and select it
    pub fn dispatch(&self, input: NavInput) {
        let threshold = self.config.with_value(|c| c.swipe_threshold_px);
        match self.state.with_untracked(|s| input.target(s, threshold)) {
            Some(day) => self.select_day(day),
            None => log::debug!("Input ignored: {:?}", input),
        }
    }

    /// Arrow key on the tab of `from`: move focus and selection together
    pub fn arrow(&self, key: ArrowKey, from: DayId, direction: TextDirection) {
        let input = NavInput::Arrow {
            key,
            from,
            direction,
        };
        let threshold = self.config.with_value(|c| c.swipe_threshold_px);
        if let Some(day) = self.state.with_untracked(|s| input.target(s, threshold)) {
            self.focused.set(Some(day));
            self.select_day(day);
        }
    }

    pub fn begin_touch(&self, x: f64) {
        self.swipe.update_value(|tracker| tracker.begin(x));
    }

    /// Finish the current touch. Returns `true` when it produced an input.
    pub fn finish_touch(&self, end_x: f64, tapped: Option<DayId>) -> bool {
        let threshold = self.config.with_value(|c| c.swipe_threshold_px);
        let mut tracker = self.swipe.get_value();
        let input = tracker.finish(end_x, threshold, tapped);
        self.swipe.set_value(tracker);
        match input {
            Some(input) => {
                self.dispatch(input);
                true
            }
            None => false,
        }
    }

    pub fn cancel_touch(&self) {
        self.swipe.set_value(SwipeTracker::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::day_navigator::DaySet;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    thread_local! {
        static SCROLLED: RefCell<Vec<DayId>> = const { RefCell::new(Vec::new()) };
    }

    fn record_scroll(_: NavigatorConfig, day: DayId) {
        SCROLLED.with(|s| s.borrow_mut().push(day));
    }

    fn scrolled() -> Vec<DayId> {
        SCROLLED.with(|s| s.borrow().clone())
    }

    fn week_context(start: u32) -> DayNavigatorContext {
        let days = DaySet::new((1..=7).map(DayId::new));
        let state = NavigatorState::new(days, Some(DayId(start))).unwrap();
        DayNavigatorContext::new(state, NavigatorConfig::default(), LayoutMode::Pointer)
            .with_scroll(record_scroll)
    }

    fn current_day(ctx: &DayNavigatorContext) -> DayId {
        ctx.state.with_untracked(|s| s.current_day())
    }

    #[test]
    fn test_arrow_from_last_tab_wraps_focus_and_selection() {
        Owner::new().with(|| {
            let ctx = week_context(7);
            ctx.arrow(ArrowKey::Right, DayId(7), TextDirection::Ltr);

            assert_eq!(current_day(&ctx), DayId(1));
            assert_eq!(ctx.focused.get_untracked(), Some(DayId(1)));
            let view = ctx.view.get_untracked();
            assert_eq!(view.tab(DayId(1)).map(|t| t.aria_selected()), Some("true"));
            assert_eq!(view.tab(DayId(7)).map(|t| t.aria_selected()), Some("false"));
            assert_eq!(scrolled(), vec![DayId(1)]);
        });
    }

    #[test]
    fn test_arrow_under_rtl_moves_backwards_on_right() {
        Owner::new().with(|| {
            let ctx = week_context(3);
            ctx.arrow(ArrowKey::Right, DayId(3), TextDirection::Rtl);
            assert_eq!(current_day(&ctx), DayId(2));
            assert_eq!(ctx.focused.get_untracked(), Some(DayId(2)));
        });
    }

    #[test]
    fn test_reselect_keeps_state_signal_quiet_but_scrolls() {
        Owner::new().with(|| {
            let ctx = week_context(2);
            let recomputes = Arc::new(AtomicUsize::new(0));
            let counter = recomputes.clone();
            let watched = Memo::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                ctx.state.with(|s| s.current_day())
            });
            assert_eq!(watched.get_untracked(), DayId(2));

            ctx.select_day(DayId(2));
            assert_eq!(watched.get_untracked(), DayId(2));
            assert_eq!(recomputes.load(Ordering::SeqCst), 1);
            assert_eq!(scrolled(), vec![DayId(2)]);

            ctx.select_day(DayId(3));
            assert_eq!(watched.get_untracked(), DayId(3));
            assert_eq!(recomputes.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_unknown_day_is_ignored() {
        Owner::new().with(|| {
            let ctx = week_context(4);
            ctx.select_day(DayId(9));
            ctx.dispatch(NavInput::Tap(DayId(0)));

            assert_eq!(current_day(&ctx), DayId(4));
            assert!(scrolled().is_empty());
        });
    }

    #[test]
    fn test_click_selects_tab_and_panel() {
        Owner::new().with(|| {
            let ctx = week_context(1);
            ctx.dispatch(NavInput::Tap(DayId(3)));

            assert_eq!(current_day(&ctx), DayId(3));
            let view = ctx.view.get_untracked();
            let visible: Vec<DayId> = view.panels.iter().filter(|p| p.visible).map(|p| p.day).collect();
            assert_eq!(visible, vec![DayId(3)]);
        });
    }

    #[test]
    fn test_touch_swipe_and_tap() {
        Owner::new().with(|| {
            let ctx = week_context(2);

            ctx.begin_touch(300.0);
            assert!(ctx.finish_touch(220.0, None));
            assert_eq!(current_day(&ctx), DayId(3));

            ctx.begin_touch(100.0);
            assert!(ctx.finish_touch(110.0, Some(DayId(6))));
            assert_eq!(current_day(&ctx), DayId(6));

            // short touch between tabs does nothing
            ctx.begin_touch(100.0);
            assert!(!ctx.finish_touch(105.0, None));
            assert_eq!(current_day(&ctx), DayId(6));
        });
    }

    #[test]
    fn test_swipe_right_on_first_day_is_noop() {
        Owner::new().with(|| {
            let ctx = week_context(1);
            ctx.begin_touch(100.0);
            ctx.finish_touch(180.0, None);
            assert_eq!(current_day(&ctx), DayId(1));
            assert!(scrolled().is_empty());
        });
    }

    #[test]
    fn test_cancelled_touch_is_not_a_swipe() {
        Owner::new().with(|| {
            let ctx = week_context(2);
            ctx.begin_touch(300.0);
            ctx.cancel_touch();
            assert!(!ctx.finish_touch(200.0, None));
            assert_eq!(current_day(&ctx), DayId(2));
        });
    }
}
