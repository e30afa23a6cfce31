//! Range constraint engine

use chrono::{DateTime, Utc};

use tv_data::time::{date_to_timestamp, parse_timestamp};
use tv_data::Dataset;

use crate::selection::SelectionTransition;

/// Derived bounds plus the user's active window
///
/// When fully set, `min_date <= start_date <= end_date <= max_date` holds,
/// with one deliberate exception: a selection whose available ranges share
/// no common window yields `min_date > max_date`. That state is kept
/// representable so the range widget can surface the inconsistency instead
/// of the engine throwing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeState {
    /// Lower bound derived from the selection; unset without a selection
    pub min_date: Option<DateTime<Utc>>,

    /// Upper bound derived from the selection
    pub max_date: Option<DateTime<Utc>>,

    /// Start of the user-chosen active window
    pub start_date: Option<DateTime<Utc>>,

    /// End of the user-chosen active window
    pub end_date: Option<DateTime<Utc>>,
}

impl RangeState {
    /// Active window in catalog timestamp units, when set
    ///
    /// Callers must not plot with an unset window; `None` is the signal.
    pub fn x_range(&self) -> Option<(i64, i64)> {
        Some((
            date_to_timestamp(self.start_date?),
            date_to_timestamp(self.end_date?),
        ))
    }
}

/// Keeps the active window consistent with the current selection
#[derive(Debug, Default)]
pub struct RangeEngine {
    state: RangeState,
}

impl RangeEngine {
    /// Create an engine with everything unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, handed to the range widget and the compiler
    pub fn state(&self) -> RangeState {
        self.state
    }

    /// Apply a selection change
    ///
    /// Bounds are derived only on the empty-to-non-empty transition: the
    /// intersection of every selected dataset's available range, i.e. the
    /// tightest common window, which also initializes the active window.
    /// Edits that keep the selection non-empty leave bounds and window
    /// untouched so the user's chosen window does not shift mid-edit.
    /// Clearing the selection resets all four fields to unset.
    pub fn on_selection<'a>(
        &mut self,
        transition: SelectionTransition,
        datasets: impl IntoIterator<Item = &'a Dataset>,
    ) {
        match transition {
            SelectionTransition::BecameNonEmpty => {
                let mut min: Option<i64> = None;
                let mut max: Option<i64> = None;
                for dataset in datasets {
                    let [lo, hi] = dataset.available_x_range;
                    min = Some(min.map_or(lo, |m| m.max(lo)));
                    max = Some(max.map_or(hi, |m| m.min(hi)));
                }

                let min_date = min.map(parse_timestamp);
                let max_date = max.map(parse_timestamp);
                self.state = RangeState {
                    min_date,
                    max_date,
                    start_date: min_date,
                    end_date: max_date,
                };
            }
            SelectionTransition::BecameEmpty => {
                self.state = RangeState::default();
            }
            SelectionTransition::StillNonEmpty | SelectionTransition::StillEmpty => {}
        }
    }

    /// User-driven window change
    ///
    /// Overwrites the window verbatim; clamping to the bounds is the range
    /// widget's job.
    pub fn on_range_change(&mut self, start: DateTime<Utc>, end: DateTime<Utc>) {
        self.state.start_date = Some(start);
        self.state.end_date = Some(end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(id: &str, range: [i64; 2]) -> Dataset {
        Dataset {
            id: id.to_string(),
            name: id.to_uppercase(),
            source: "s1".to_string(),
            available_x_range: range,
            variants: None,
        }
    }

    #[test]
    fn test_intersection_on_first_selection() {
        let mut engine = RangeEngine::new();
        let datasets = [
            dataset("a", [1, 10]),
            dataset("b", [5, 20]),
            dataset("c", [0, 8]),
        ];

        engine.on_selection(SelectionTransition::BecameNonEmpty, datasets.iter());

        let state = engine.state();
        assert_eq!(state.min_date, Some(parse_timestamp(5)));
        assert_eq!(state.max_date, Some(parse_timestamp(8)));
        assert_eq!(state.start_date, Some(parse_timestamp(5)));
        assert_eq!(state.end_date, Some(parse_timestamp(8)));
    }

    #[test]
    fn test_bounds_persist_across_nonempty_edits() {
        let mut engine = RangeEngine::new();
        let first = [dataset("a", [5, 8])];
        engine.on_selection(SelectionTransition::BecameNonEmpty, first.iter());
        engine.on_range_change(parse_timestamp(6), parse_timestamp(7));

        // Adding a dataset keeps the selection non-empty; nothing recomputes
        let wider = [dataset("a", [5, 8]), dataset("b", [0, 100])];
        engine.on_selection(SelectionTransition::StillNonEmpty, wider.iter());

        let state = engine.state();
        assert_eq!(state.min_date, Some(parse_timestamp(5)));
        assert_eq!(state.max_date, Some(parse_timestamp(8)));
        assert_eq!(state.start_date, Some(parse_timestamp(6)));
        assert_eq!(state.end_date, Some(parse_timestamp(7)));
    }

    #[test]
    fn test_reset_on_empty_selection() {
        let mut engine = RangeEngine::new();
        let datasets = [dataset("a", [1, 10])];
        engine.on_selection(SelectionTransition::BecameNonEmpty, datasets.iter());
        engine.on_range_change(parse_timestamp(2), parse_timestamp(3));

        engine.on_selection(SelectionTransition::BecameEmpty, std::iter::empty());

        assert_eq!(engine.state(), RangeState::default());
        assert_eq!(engine.state().x_range(), None);
    }

    #[test]
    fn test_disjoint_ranges_stay_representable() {
        let mut engine = RangeEngine::new();
        let datasets = [dataset("a", [0, 10]), dataset("b", [20, 30])];

        engine.on_selection(SelectionTransition::BecameNonEmpty, datasets.iter());

        let state = engine.state();
        assert_eq!(state.min_date, Some(parse_timestamp(20)));
        assert_eq!(state.max_date, Some(parse_timestamp(10)));
        assert!(state.min_date > state.max_date);
        // Still convertible; the widget surfaces the inconsistency
        assert_eq!(state.x_range(), Some((20, 10)));
    }

    #[test]
    fn test_range_change_overwrites_window_only() {
        let mut engine = RangeEngine::new();
        let datasets = [dataset("a", [0, 100])];
        engine.on_selection(SelectionTransition::BecameNonEmpty, datasets.iter());

        engine.on_range_change(parse_timestamp(40), parse_timestamp(60));

        let state = engine.state();
        assert_eq!(state.min_date, Some(parse_timestamp(0)));
        assert_eq!(state.max_date, Some(parse_timestamp(100)));
        assert_eq!(state.x_range(), Some((40, 60)));
    }
}
