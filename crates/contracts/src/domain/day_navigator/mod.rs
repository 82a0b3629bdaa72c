//! Day Navigator: выбор дня маршрута, синхронизация вкладок и панелей.

pub mod aggregate;
pub mod input;
pub mod presentation;
pub mod scroll;

pub use aggregate::{DayId, DaySet, NavigatorState, Selection};
pub use input::{ArrowKey, Gesture, NavInput, SwipeTracker, TextDirection};
pub use presentation::{render, LayoutMode, NavigatorView, PanelView, TabView};
pub use scroll::{scroll_target, ScrollMetrics};
