//! The search state machine: [`SearchState`] and its transition table.

use std::fmt;

/// Where a session's search currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has begun since the session opened or was reset.
    #[default]
    NotStarted,
    /// The scheduler is taking steps.
    Running,
    /// Incomplete; open and closed sets are kept for resumption.
    Paused,
    /// Finished and the goal was reached.
    PathFound,
    /// Finished with the reachable space exhausted.
    PathNotFound,
}

/// An event that may move the state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Start,
    Pause,
    Resume,
    /// A single manual step was requested.
    Step,
    /// A step popped the goal.
    GoalReached,
    /// A step found the open set empty.
    Exhausted,
    Reset,
}

impl SearchState {
    /// The transition table. `None` means the trigger is not valid in this
    /// state and must be ignored.
    pub fn next(self, trigger: Trigger) -> Option<SearchState> {
        use SearchState::*;
        use Trigger::*;

        match (self, trigger) {
            (NotStarted | PathFound | PathNotFound, Start) => Some(Running),
            (Running, Pause) => Some(Paused),
            (Paused, Resume) => Some(Running),
            (NotStarted | PathFound | PathNotFound | Paused, Step) => Some(Paused),
            (Running | Paused, GoalReached) => Some(PathFound),
            (Running | Paused, Exhausted) => Some(PathNotFound),
            (_, Reset) => Some(NotStarted),
            _ => None,
        }
    }

    /// Whether a search is underway (running or paused). The grid is frozen
    /// in these states.
    #[inline]
    pub fn in_progress(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// Whether the last search has finished.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::PathFound | Self::PathNotFound)
    }

    /// Text for a state label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Running => "Running...",
            Self::Paused => "Paused",
            Self::PathFound => "Path found",
            Self::PathNotFound => "No path found",
        }
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchState::*;
    use super::*;

    #[test]
    fn happy_path() {
        let s = NotStarted.next(Trigger::Start).unwrap();
        assert_eq!(s, Running);
        let s = s.next(Trigger::Pause).unwrap();
        assert_eq!(s, Paused);
        let s = s.next(Trigger::Resume).unwrap();
        assert_eq!(s, Running);
        assert_eq!(s.next(Trigger::GoalReached), Some(PathFound));
        assert_eq!(s.next(Trigger::Exhausted), Some(PathNotFound));
    }

    #[test]
    fn invalid_triggers_are_ignored() {
        assert_eq!(NotStarted.next(Trigger::Resume), None);
        assert_eq!(NotStarted.next(Trigger::Pause), None);
        assert_eq!(Running.next(Trigger::Start), None);
        assert_eq!(Paused.next(Trigger::Start), None);
        assert_eq!(Paused.next(Trigger::Pause), None);
        assert_eq!(PathFound.next(Trigger::Resume), None);
        assert_eq!(NotStarted.next(Trigger::GoalReached), None);
        assert_eq!(Running.next(Trigger::Step), None);
    }

    #[test]
    fn reset_is_accepted_everywhere() {
        for s in [NotStarted, Running, Paused, PathFound, PathNotFound] {
            assert_eq!(s.next(Trigger::Reset), Some(NotStarted));
        }
    }

    #[test]
    fn new_search_after_terminal() {
        assert_eq!(PathFound.next(Trigger::Start), Some(Running));
        assert_eq!(PathNotFound.next(Trigger::Step), Some(Paused));
    }

    #[test]
    fn frozen_states() {
        assert!(Running.in_progress());
        assert!(Paused.in_progress());
        assert!(!PathFound.in_progress());
        assert!(PathNotFound.is_terminal());
        assert!(!NotStarted.is_terminal());
    }
}
