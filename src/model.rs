//! Data model for the live feed page.
//! The reducer is deliberately free of browser calls (randomness and clock
//! reads live in the component layer) so it can be exercised off-wasm.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Oldest entries fall off once the feed grows past this.
pub const MAX_ITEMS: usize = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: u64,
    pub headline: String,
    /// Wall-clock arrival time in ms since the epoch.
    pub received_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    /// Newest first; length capped at MAX_ITEMS.
    pub items: Vec<FeedItem>,
    /// A refresh request is in flight (between the outbound "refresh" and the
    /// inbound completion). At most one at a time.
    pub refreshing: bool,
    /// Completed round trips since mount; the widget resets on every change.
    pub refresh_count: u64,
    /// Seconds since the feed last changed.
    pub age_secs: u64,
    /// Id to assign to the next generated item.
    pub next_id: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            refreshing: false,
            refresh_count: 0,
            age_secs: 0,
            next_id: 1,
        }
    }
}

fn next_id_after(items: &[FeedItem], fallback: u64) -> u64 {
    items
        .iter()
        .map(|item| item.id + 1)
        .max()
        .unwrap_or(fallback)
        .max(fallback)
}

#[derive(Clone, Debug)]
pub enum FeedAction {
    /// Outbound refresh request left the page.
    BeginRefresh,
    /// Inbound completion with the freshly produced entries.
    CompleteRefresh { items: Vec<FeedItem> },
    /// Snapshot loaded from local storage on mount.
    RestoreItems { items: Vec<FeedItem> },
    /// Called once per elapsed real second.
    TickSecond,
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use FeedAction::*;
        let mut new = (*self).clone();
        match action {
            BeginRefresh => {
                // Only one request in flight; repeats are dropped here.
                if new.refreshing {
                    return self;
                }
                new.refreshing = true;
            }
            CompleteRefresh { items } => {
                let mut merged = items;
                merged.extend(new.items.iter().cloned());
                merged.truncate(MAX_ITEMS);
                new.next_id = next_id_after(&merged, new.next_id);
                new.items = merged;
                new.refreshing = false;
                new.refresh_count = new.refresh_count.saturating_add(1);
                new.age_secs = 0;
            }
            RestoreItems { items } => {
                new.next_id = next_id_after(&items, new.next_id);
                new.items = items;
            }
            TickSecond => {
                if new.items.is_empty() {
                    return self;
                }
                new.age_secs = new.age_secs.saturating_add(1);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, headline: &str) -> FeedItem {
        FeedItem {
            id,
            headline: headline.to_string(),
            received_ms: 0.0,
        }
    }

    #[test]
    fn begin_then_complete_round_trip() {
        let state = Rc::new(FeedState::default());
        let state = state.reduce(FeedAction::BeginRefresh);
        assert!(state.refreshing);
        assert_eq!(state.refresh_count, 0);

        let state = state.reduce(FeedAction::CompleteRefresh {
            items: vec![item(1, "a"), item(2, "b")],
        });
        assert!(!state.refreshing);
        assert_eq!(state.refresh_count, 1);
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.age_secs, 0);
        assert_eq!(state.next_id, 3);
    }

    #[test]
    fn second_begin_while_in_flight_is_dropped() {
        let state = Rc::new(FeedState::default());
        let state = state.reduce(FeedAction::BeginRefresh);
        let again = state.clone().reduce(FeedAction::BeginRefresh);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn complete_prepends_newest_first() {
        let state = Rc::new(FeedState {
            items: vec![item(1, "old")],
            next_id: 2,
            ..Default::default()
        });
        let state = state.reduce(FeedAction::CompleteRefresh {
            items: vec![item(2, "new")],
        });
        assert_eq!(state.items[0].headline, "new");
        assert_eq!(state.items[1].headline, "old");
    }

    #[test]
    fn feed_is_capped_at_max_items() {
        let old: Vec<FeedItem> = (1..=MAX_ITEMS as u64).map(|i| item(i, "x")).collect();
        let state = Rc::new(FeedState {
            items: old,
            next_id: MAX_ITEMS as u64 + 1,
            ..Default::default()
        });
        let state = state.reduce(FeedAction::CompleteRefresh {
            items: vec![item(MAX_ITEMS as u64 + 1, "newest")],
        });
        assert_eq!(state.items.len(), MAX_ITEMS);
        assert_eq!(state.items[0].headline, "newest");
    }

    #[test]
    fn restore_replaces_items_and_advances_next_id() {
        let state = Rc::new(FeedState::default());
        let state = state.reduce(FeedAction::RestoreItems {
            items: vec![item(7, "kept"), item(3, "kept too")],
        });
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.next_id, 8);
        assert_eq!(state.refresh_count, 0);
    }

    #[test]
    fn ticking_only_ages_a_non_empty_feed() {
        let empty = Rc::new(FeedState::default());
        let empty = empty.reduce(FeedAction::TickSecond);
        assert_eq!(empty.age_secs, 0);

        let state = Rc::new(FeedState {
            items: vec![item(1, "a")],
            next_id: 2,
            ..Default::default()
        });
        let state = state.reduce(FeedAction::TickSecond);
        let state = state.reduce(FeedAction::TickSecond);
        assert_eq!(state.age_secs, 2);
    }
}
