use crate::board::{Card, CardBoard};
use crate::task::Task;

/// Which cards and controls are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// All cards plus the input and sort controls.
    #[default]
    Normal,
    /// Only high-priority cards; controls hidden, "back" shown.
    PriorityOnly,
}

impl DisplayMode {
    /// Whether a rendered card is shown in this mode.
    #[must_use]
    pub const fn shows(self, card: &Card) -> bool {
        match self {
            Self::Normal => true,
            Self::PriorityOnly => card.is_highlighted(),
        }
    }

    /// Whether a stored task belongs to this mode's display set.
    #[must_use]
    pub const fn shows_task(self, task: &Task) -> bool {
        match self {
            Self::Normal => true,
            Self::PriorityOnly => task.priority(),
        }
    }

    /// Whether the input form and sort control are available.
    #[must_use]
    pub const fn controls_visible(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Whether the "back" affordance is shown.
    #[must_use]
    pub const fn back_visible(self) -> bool {
        matches!(self, Self::PriorityOnly)
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::PriorityOnly => "priority-only",
        }
    }
}

/// Two-state machine switching between [`DisplayMode::Normal`] and
/// [`DisplayMode::PriorityOnly`].
///
/// Transitions only toggle visibility; they never reorder or recreate cards.
#[derive(Debug, Default, Clone)]
pub struct VisibilityController {
    mode: DisplayMode,
}

impl VisibilityController {
    /// Start in [`DisplayMode::Normal`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Normal,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// `Normal → PriorityOnly`. Returns whether the mode changed.
    pub fn show_high_priority(&mut self, board: &mut CardBoard) -> bool {
        self.transition(DisplayMode::PriorityOnly, board)
    }

    /// `PriorityOnly → Normal`. Returns whether the mode changed.
    pub fn back(&mut self, board: &mut CardBoard) -> bool {
        self.transition(DisplayMode::Normal, board)
    }

    /// Re-apply the current mode to every card.
    pub fn apply(&self, board: &mut CardBoard) {
        let mode = self.mode;
        board.set_visible(|card| mode.shows(card));
    }

    fn transition(&mut self, target: DisplayMode, board: &mut CardBoard) -> bool {
        let changed = self.mode != target;
        self.mode = target;
        self.apply(board);
        changed
    }
}
