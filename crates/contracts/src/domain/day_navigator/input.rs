//! Input channels of the navigator.
//!
//! Every channel (tap, swipe, arrow key) is turned into a [`NavInput`], and a
//! `NavInput` resolves to at most one target day for `select_day`.

use super::aggregate::{DayId, NavigatorState};

/// Text direction of the document (`document.dir`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn from_dir(dir: &str) -> Self {
        if dir.trim().eq_ignore_ascii_case("rtl") {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    /// Map a `KeyboardEvent.key` value; other keys are not navigation keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }

    /// Whether the key moves to the next tab under the given direction
    pub fn is_forward(self, direction: TextDirection) -> bool {
        matches!(
            (self, direction),
            (ArrowKey::Right, TextDirection::Ltr) | (ArrowKey::Left, TextDirection::Rtl)
        )
    }
}

/// Classification of a finished horizontal touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Movement within the threshold
    Tap,
    /// Finger moved right: previous day
    SwipeRight,
    /// Finger moved left: next day
    SwipeLeft,
}

impl Gesture {
    pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Self {
        let delta = end_x - start_x;
        if delta > threshold {
            Gesture::SwipeRight
        } else if -delta > threshold {
            Gesture::SwipeLeft
        } else {
            Gesture::Tap
        }
    }
}

/// One user action on the tab strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavInput {
    /// Click or tap on the tab of a day
    Tap(DayId),
    /// Horizontal touch on the strip, screen coordinates in px
    Swipe { start_x: f64, end_x: f64 },
    /// Arrow key pressed while the tab of `from` had focus
    Arrow {
        key: ArrowKey,
        from: DayId,
        direction: TextDirection,
    },
}

impl NavInput {
    /// Day this input asks to select, `None` when it is a no-op
    pub fn target(&self, state: &NavigatorState, swipe_threshold: f64) -> Option<DayId> {
        let days = state.days();
        match *self {
            NavInput::Tap(day) => Some(day),
            NavInput::Swipe { start_x, end_x } => {
                match Gesture::classify(start_x, end_x, swipe_threshold) {
                    Gesture::Tap => None,
                    Gesture::SwipeRight => days.previous(state.current_day()),
                    Gesture::SwipeLeft => days.next(state.current_day()),
                }
            }
            NavInput::Arrow {
                key,
                from,
                direction,
            } => {
                if key.is_forward(direction) {
                    days.next_circular(from)
                } else {
                    days.previous_circular(from)
                }
            }
        }
    }
}

/// Tracks one touch on the tab strip from `touchstart` to `touchend`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Close the touch and return the input it produced.
    ///
    /// `tapped` is the day of the tab the touch ended on, if any. A touch that
    /// stays within the threshold is a tap on that tab; a longer one is a swipe.
    pub fn finish(&mut self, end_x: f64, threshold: f64, tapped: Option<DayId>) -> Option<NavInput> {
        let Some(start_x) = self.start_x.take() else {
            return tapped.map(NavInput::Tap);
        };
        match Gesture::classify(start_x, end_x, threshold) {
            Gesture::Tap => tapped.map(NavInput::Tap),
            Gesture::SwipeRight | Gesture::SwipeLeft => Some(NavInput::Swipe { start_x, end_x }),
        }
    }
}
