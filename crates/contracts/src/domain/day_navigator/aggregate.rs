use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::{NavigatorError, NavigatorResult};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор дня маршрута (значение атрибута `data-day`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayId(pub u32);

impl DayId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayId {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(DayId::new)
            .map_err(|_| NavigatorError::InvalidDayAttribute(s.to_string()))
    }
}

// ============================================================================
// Day set
// ============================================================================

/// Упорядоченный набор дней, найденных в разметке страницы
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaySet {
    days: Vec<DayId>,
}

impl DaySet {
    pub fn new(days: impl IntoIterator<Item = DayId>) -> Self {
        let mut days: Vec<DayId> = days.into_iter().collect();
        days.sort();
        days.dedup();
        Self { days }
    }

    pub fn days(&self) -> &[DayId] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first(&self) -> Option<DayId> {
        self.days.first().copied()
    }

    pub fn contains(&self, day: DayId) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    pub fn position(&self, day: DayId) -> Option<usize> {
        self.days.binary_search(&day).ok()
    }

    /// Next day, or `None` at the end of the set
    pub fn next(&self, day: DayId) -> Option<DayId> {
        let index = self.position(day)?;
        self.days.get(index + 1).copied()
    }

    /// Previous day, or `None` at the start of the set
    pub fn previous(&self, day: DayId) -> Option<DayId> {
        let index = self.position(day)?;
        index.checked_sub(1).and_then(|i| self.days.get(i).copied())
    }

    /// Next day, wrapping from the last to the first
    pub fn next_circular(&self, day: DayId) -> Option<DayId> {
        let index = self.position(day)?;
        self.days.get((index + 1) % self.days.len()).copied()
    }

    /// Previous day, wrapping from the first to the last
    pub fn previous_circular(&self, day: DayId) -> Option<DayId> {
        let index = self.position(day)?;
        let len = self.days.len();
        self.days.get((index + len - 1) % len).copied()
    }
}

// ============================================================================
// Navigator state
// ============================================================================

/// Результат попытки выбрать день
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Selection moved from `from` to `to`
    Changed { from: DayId, to: DayId },
    /// Target was already selected
    Unchanged(DayId),
    /// Target is not in the day set
    Ignored(DayId),
}

/// Состояние навигатора: текущий день и набор дней.
///
/// `current_day` is always a member of `days`, so exactly one tab and one
/// panel are selected at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    current_day: DayId,
    days: DaySet,
}

impl NavigatorState {
    /// Start on `preferred` when it exists in the set, otherwise on the first day
    pub fn new(days: DaySet, preferred: Option<DayId>) -> NavigatorResult<Self> {
        let first = days.first().ok_or(NavigatorError::EmptyDaySet)?;
        let current_day = preferred.filter(|day| days.contains(*day)).unwrap_or(first);
        Ok(Self { current_day, days })
    }

    pub fn current_day(&self) -> DayId {
        self.current_day
    }

    pub fn days(&self) -> &DaySet {
        &self.days
    }

    pub fn is_selected(&self, day: DayId) -> bool {
        self.current_day == day
    }

    /// What `select_day` would do, without mutating
    pub fn classify(&self, target: DayId) -> Selection {
        if !self.days.contains(target) {
            Selection::Ignored(target)
        } else if target == self.current_day {
            Selection::Unchanged(target)
        } else {
            Selection::Changed {
                from: self.current_day,
                to: target,
            }
        }
    }

    pub fn select_day(&mut self, target: DayId) -> Selection {
        let selection = self.classify(target);
        if let Selection::Changed { to, .. } = selection {
            self.current_day = to;
        }
        selection
    }
}
