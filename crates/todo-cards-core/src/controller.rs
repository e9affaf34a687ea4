use tracing::{debug, info, warn};

use crate::board::{Card, CardBoard};
use crate::error::{ValidationError, ValidationErrors};
use crate::id::CardId;
use crate::store::TaskStore;
use crate::validate::{RawTaskInput, TaskInput, validate};
use crate::visibility::{DisplayMode, VisibilityController};

/// User-visible validation indicators, each toggled independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorIndicators {
    /// "Title is empty" is shown.
    pub title_empty: bool,
    /// "Description is empty" is shown.
    pub description_empty: bool,
    /// "Title already exists" is shown.
    pub title_duplicate: bool,
}

impl ErrorIndicators {
    /// Hide every indicator.
    pub const fn clear(&mut self) {
        *self = Self {
            title_empty: false,
            description_empty: false,
            title_duplicate: false,
        };
    }

    /// Whether any indicator is shown.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.title_empty || self.description_empty || self.title_duplicate
    }

    /// Whether the indicator for `reason` is shown.
    #[must_use]
    pub const fn is_raised(&self, reason: ValidationError) -> bool {
        match reason {
            ValidationError::EmptyTitle => self.title_empty,
            ValidationError::EmptyDescription => self.description_empty,
            ValidationError::DuplicateTitle => self.title_duplicate,
        }
    }

    fn raise(&mut self, errors: &ValidationErrors) {
        for reason in errors.iter() {
            match reason {
                ValidationError::EmptyTitle => self.title_empty = true,
                ValidationError::EmptyDescription => self.description_empty = true,
                ValidationError::DuplicateTitle => self.title_duplicate = true,
            }
        }
    }
}

/// Result of an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Task stored and rendered as the given card.
    Added(CardId),
    /// Input rejected; the matching indicators are raised.
    Rejected(ValidationErrors),
    /// The input form is hidden in the current display mode.
    Unavailable,
}

/// Facade owning the task store, its rendered cards and the display mode.
///
/// Every mutating call leaves the board mirroring the store before it returns.
#[derive(Debug, Default)]
pub struct TodoController {
    store: TaskStore,
    board: CardBoard,
    visibility: VisibilityController,
    indicators: ErrorIndicators,
}

impl TodoController {
    /// Empty session in [`DisplayMode::Normal`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative task list.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Rendered cards.
    #[must_use]
    pub const fn board(&self) -> &CardBoard {
        &self.board
    }

    /// Current display mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.visibility.mode()
    }

    /// Validation indicators from the latest add attempt.
    #[must_use]
    pub const fn indicators(&self) -> &ErrorIndicators {
        &self.indicators
    }

    /// Validate and store a task, then render its card.
    pub fn add(&mut self, raw: &RawTaskInput) -> AddOutcome {
        if !self.mode().controls_visible() {
            debug!(mode = self.mode().as_str(), "add ignored while input is hidden");
            return AddOutcome::Unavailable;
        }

        self.indicators.clear();
        let input = TaskInput::from_raw(raw);
        let task = match validate(&input, &self.store) {
            Ok(task) => task,
            Err(errors) => {
                debug!(%errors, "task rejected");
                self.indicators.raise(&errors);
                return AddOutcome::Rejected(errors);
            }
        };

        let card = match self.store.add(task) {
            Ok(stored) => self.board.render_card(stored),
            Err(err) => {
                warn!(%err, "store rejected a validated task");
                let errors: ValidationErrors = [ValidationError::DuplicateTitle].into_iter().collect();
                self.indicators.raise(&errors);
                return AddOutcome::Rejected(errors);
            }
        };
        self.visibility.apply(&mut self.board);
        debug!(title = input.title(), %card, "task added");
        self.debug_check_sync();
        AddOutcome::Added(card)
    }

    /// Remove the task a card was rendered from, together with the card.
    ///
    /// Returns `false` when nothing was removed from the store. A card whose
    /// task is missing is still dropped so the board stays in sync.
    pub fn delete(&mut self, card: CardId) -> bool {
        let Some(title) = self.board.removal_key(card).map(str::to_owned) else {
            warn!(%card, "delete requested for unknown card");
            return false;
        };

        let removed = match self.store.remove(&title) {
            Ok(task) => {
                info!(title = task.title(), "task removed");
                true
            }
            Err(err) => {
                warn!(%err, %card, "card pointed at a task missing from the store");
                false
            }
        };
        self.board.remove_card(card);
        self.debug_check_sync();
        removed
    }

    /// Sort tasks by title and re-render every card. Returns `false` while the
    /// sort control is hidden.
    pub fn sort(&mut self) -> bool {
        if !self.mode().controls_visible() {
            debug!(mode = self.mode().as_str(), "sort ignored while controls are hidden");
            return false;
        }

        self.store.sort_by_title();
        self.board.rebuild_from(self.store.list_all());
        self.visibility.apply(&mut self.board);
        debug!(tasks = self.store.len(), "tasks sorted by title");
        self.debug_check_sync();
        true
    }

    /// Switch to the high-priority view. Returns whether the mode changed.
    pub fn show_high_priority(&mut self) -> bool {
        let changed = self.visibility.show_high_priority(&mut self.board);
        debug!(changed, visible = self.board.visible_len(), "entered priority-only mode");
        self.debug_check_sync();
        changed
    }

    /// Return to the full view. Returns whether the mode changed.
    pub fn back(&mut self) -> bool {
        let changed = self.visibility.back(&mut self.board);
        debug!(changed, visible = self.board.visible_len(), "returned to normal mode");
        self.debug_check_sync();
        changed
    }

    /// Card currently rendered for `title`, if shown.
    #[must_use]
    pub fn visible_card_for(&self, title: &str) -> Option<CardId> {
        self.board.find_visible(title).map(Card::id)
    }

    fn debug_check_sync(&self) {
        debug_assert!(
            self.board.mirrors(&self.store, self.mode()),
            "card board diverged from task store"
        );
    }
}
