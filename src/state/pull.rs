// Pull-to-refresh gesture state, one instance per mounted widget.

/// Minimum downward drag (touch page coordinates, px) that arms a refresh on
/// release. Matches the indicator strip height so the held position lines up.
pub const PULL_THRESHOLD: f64 = 50.0;

/// Visual pull is capped at twice the threshold to bound the rubber-band
/// overscroll.
pub const MAX_PULL: f64 = PULL_THRESHOLD * 2.0;

/// Tracks one touch sequence from anchor to release plus the in-flight refresh
/// flag. `anchor_y` doubles as the active-sequence marker: a sequence that
/// starts away from the page top never gets an anchor and stays inert for its
/// whole duration.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PullState {
    anchor_y: Option<f64>,
    last_y: f64,
    loading: bool,
}

impl PullState {
    fn delta(&self) -> f64 {
        match self.anchor_y {
            Some(anchor) => self.last_y - anchor,
            None => 0.0,
        }
    }

    pub fn pulling(&self) -> bool {
        self.anchor_y.is_some() && self.delta() > 0.0
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Vertical translation the widget child should carry right now.
    /// Always in `[0, MAX_PULL]`.
    pub fn offset(&self) -> f64 {
        if self.loading {
            PULL_THRESHOLD
        } else if self.pulling() {
            self.delta().min(MAX_PULL)
        } else {
            0.0
        }
    }

    /// Begin a sequence. Ignored mid-refresh or when the page is scrolled away
    /// from the top.
    pub fn touch_start(&mut self, y: f64, at_top: bool) {
        if self.loading || !at_top {
            return;
        }
        self.anchor_y = Some(y);
        self.last_y = y;
    }

    pub fn touch_move(&mut self, y: f64) {
        if self.loading {
            return;
        }
        self.last_y = y;
    }

    /// End the sequence. Returns true when the release should emit a single
    /// refresh request; the state then stays loading until [`Self::refreshed`].
    /// A sequence that never anchored can never trigger.
    pub fn touch_end(&mut self) -> bool {
        let triggered = self.anchor_y.is_some() && self.delta() >= PULL_THRESHOLD;
        if triggered {
            self.loading = true;
        }
        self.anchor_y = None;
        self.last_y = 0.0;
        triggered
    }

    /// Inbound completion signal. Safe to deliver more than once.
    pub fn refreshed(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_has_zero_offset() {
        let pull = PullState::default();
        assert!(!pull.pulling());
        assert!(!pull.is_loading());
        assert_eq!(pull.offset(), 0.0);
    }

    #[test]
    fn sequence_away_from_top_stays_inert() {
        let mut pull = PullState::default();
        pull.touch_start(200.0, false);
        assert_eq!(pull.offset(), 0.0);
        pull.touch_move(260.0);
        assert!(!pull.pulling());
        assert_eq!(pull.offset(), 0.0);
        // Release measures against an unset anchor: no emission.
        assert!(!pull.touch_end());
        assert!(!pull.is_loading());
        assert_eq!(pull.offset(), 0.0);
    }

    #[test]
    fn move_without_start_never_pulls() {
        let mut pull = PullState::default();
        pull.touch_move(500.0);
        assert!(!pull.pulling());
        assert_eq!(pull.offset(), 0.0);
        assert!(!pull.touch_end());
    }

    #[test]
    fn upward_motion_is_not_a_pull() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        pull.touch_move(40.0);
        assert!(!pull.pulling());
        assert_eq!(pull.offset(), 0.0);
        assert!(!pull.touch_end());
    }

    #[test]
    fn offset_tracks_pull_and_clamps_at_twice_threshold() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        assert_eq!(pull.offset(), 0.0);
        pull.touch_move(130.0);
        assert!(pull.pulling());
        assert_eq!(pull.offset(), 30.0);
        pull.touch_move(1000.0);
        assert_eq!(pull.offset(), MAX_PULL);
    }

    #[test]
    fn release_at_exact_threshold_triggers() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        pull.touch_move(100.0 + PULL_THRESHOLD);
        assert!(pull.touch_end());
        assert!(pull.is_loading());
        assert_eq!(pull.offset(), PULL_THRESHOLD);
    }

    #[test]
    fn release_one_short_of_threshold_does_not_trigger() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        pull.touch_move(100.0 + PULL_THRESHOLD - 1.0);
        assert!(!pull.touch_end());
        assert!(!pull.is_loading());
        assert_eq!(pull.offset(), 0.0);
    }

    #[test]
    fn input_is_frozen_while_loading() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        pull.touch_move(180.0);
        assert!(pull.touch_end());

        let before = pull.clone();
        pull.touch_start(10.0, true);
        pull.touch_move(400.0);
        assert_eq!(pull, before);
        assert_eq!(pull.offset(), PULL_THRESHOLD);
        // A release during loading cannot emit a second request.
        assert!(!pull.touch_end());
        assert!(pull.is_loading());
    }

    #[test]
    fn refreshed_clears_loading_and_is_idempotent() {
        let mut pull = PullState::default();
        pull.touch_start(0.0, true);
        pull.touch_move(90.0);
        assert!(pull.touch_end());

        pull.refreshed();
        assert!(!pull.is_loading());
        assert_eq!(pull.offset(), 0.0);
        pull.refreshed();
        assert!(!pull.is_loading());
        assert_eq!(pull.offset(), 0.0);
    }

    #[test]
    fn full_round_trip_scenario() {
        let mut pull = PullState::default();
        pull.touch_start(100.0, true);
        pull.touch_move(160.0);
        assert_eq!(pull.offset(), 60.0);
        assert!(pull.touch_end());
        assert!(pull.is_loading());
        assert_eq!(pull.offset(), PULL_THRESHOLD);
        pull.refreshed();
        assert_eq!(pull.offset(), 0.0);

        // The tracker is reusable for the next gesture.
        pull.touch_start(50.0, true);
        pull.touch_move(120.0);
        assert_eq!(pull.offset(), 70.0);
        assert!(pull.touch_end());
    }
}
