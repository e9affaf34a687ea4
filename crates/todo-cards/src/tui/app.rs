use todo_cards_core::{AddOutcome, Card, CardId, DisplayMode, RawTaskInput, TodoController};

/// Session state behind the TUI: the controller plus the selected card.
///
/// The selection is an index into the visible cards and is clamped after
/// every mutation so it never points past the end of the list.
#[derive(Debug, Default)]
pub(super) struct App {
    controller: TodoController,
    selected: usize,
}

impl App {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) const fn controller(&self) -> &TodoController {
        &self.controller
    }

    pub(super) const fn mode(&self) -> DisplayMode {
        self.controller.mode()
    }

    pub(super) fn visible_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.controller.board().visible_cards()
    }

    pub(super) fn has_visible_cards(&self) -> bool {
        self.visible_cards().next().is_some()
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn selected_card(&self) -> Option<&Card> {
        self.visible_cards().nth(self.selected)
    }

    pub(super) fn select_next(&mut self) {
        let len = self.controller.board().visible_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub(super) fn select_prev(&mut self) {
        let len = self.controller.board().visible_len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Validate and add the form contents; a new card becomes the selection.
    pub(super) fn add(&mut self, raw: &RawTaskInput) -> AddOutcome {
        let outcome = self.controller.add(raw);
        if let AddOutcome::Added(card) = &outcome {
            self.select_card(*card);
        }
        outcome
    }

    /// Delete the selected card, returning the title of the removed task.
    pub(super) fn delete_selected(&mut self) -> Option<String> {
        let card = self.selected_card()?;
        let (id, title) = (card.id(), card.title().to_owned());
        let removed = self.controller.delete(id);
        self.clamp_selection();
        removed.then_some(title)
    }

    pub(super) fn sort(&mut self) -> bool {
        self.keeping_selection(TodoController::sort)
    }

    pub(super) fn show_high_priority(&mut self) -> bool {
        self.keeping_selection(TodoController::show_high_priority)
    }

    pub(super) fn back(&mut self) -> bool {
        self.keeping_selection(TodoController::back)
    }

    /// Run `action`, then re-select the previously selected title if it is
    /// still shown.
    fn keeping_selection(&mut self, action: impl FnOnce(&mut TodoController) -> bool) -> bool {
        let title = self.selected_card().map(|card| card.title().to_owned());
        let changed = action(&mut self.controller);
        match title.and_then(|title| self.controller.visible_card_for(&title)) {
            Some(card) => self.select_card(card),
            None => self.clamp_selection(),
        }
        changed
    }

    fn select_card(&mut self, id: CardId) {
        let position = self.visible_cards().position(|card| card.id() == id);
        if let Some(index) = position {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.board().visible_len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
