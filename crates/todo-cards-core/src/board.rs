use std::collections::HashMap;

use serde::Serialize;

use crate::id::CardId;
use crate::store::TaskStore;
use crate::task::Task;
use crate::visibility::DisplayMode;

/// Rendered representation of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    title: String,
    description: String,
    priority: bool,
    visible: bool,
}

impl Card {
    fn from_task(task: &Task) -> Self {
        Self {
            id: CardId::new(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            visible: true,
        }
    }

    /// Identity of this card; changes whenever the board is rebuilt.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Title shown emphasized.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description shown with whitespace preserved.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the card gets the high-priority emphasis.
    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.priority
    }

    /// Whether the card is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Rendered cards plus the card → task removal keys.
///
/// Cards are kept in the same order as the store they were rendered from;
/// hiding a card never removes it.
#[derive(Debug, Default, Clone)]
pub struct CardBoard {
    cards: Vec<Card>,
    removal_keys: HashMap<CardId, String>,
}

impl CardBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a visible card for `task` and record its removal key.
    pub fn render_card(&mut self, task: &Task) -> CardId {
        let card = Card::from_task(task);
        let id = card.id;
        self.removal_keys.insert(id, card.title.clone());
        self.cards.push(card);
        id
    }

    /// Destroy every card, hidden or not.
    pub fn clear_all(&mut self) {
        self.cards.clear();
        self.removal_keys.clear();
    }

    /// Replace all cards with freshly rendered ones for `tasks`, in order.
    pub fn rebuild_from<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>) {
        self.clear_all();
        for task in tasks {
            self.render_card(task);
        }
    }

    /// Show the cards matching `predicate` and hide the rest, in place.
    pub fn set_visible(&mut self, predicate: impl Fn(&Card) -> bool) {
        for card in &mut self.cards {
            card.visible = predicate(card);
        }
    }

    /// Destroy a single card.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        self.removal_keys.remove(&id);
        Some(self.cards.remove(index))
    }

    /// Title of the task a card was rendered from.
    #[must_use]
    pub fn removal_key(&self, id: CardId) -> Option<&str> {
        self.removal_keys.get(&id).map(String::as_str)
    }

    /// Every card, visible or hidden, in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Visible cards in display order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| card.visible)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// First visible card showing `title`.
    #[must_use]
    pub fn find_visible(&self, title: &str) -> Option<&Card> {
        self.visible_cards().find(|card| card.title == title)
    }

    /// Number of cards, hidden ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards exist.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of visible cards.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible_cards().count()
    }

    /// Whether the board mirrors `store` under `mode`.
    ///
    /// Holds when there is one card per task in store order, each removal key
    /// names its card's task, and the visible cards are exactly the tasks the
    /// mode selects, in store order.
    #[must_use]
    pub fn mirrors(&self, store: &TaskStore, mode: DisplayMode) -> bool {
        if self.cards.len() != store.len() || self.removal_keys.len() != self.cards.len() {
            return false;
        }

        let rendered_in_order = self
            .cards
            .iter()
            .zip(store.list_all())
            .all(|(card, task)| {
                card.title == task.title() && self.removal_key(card.id) == Some(task.title())
            });
        if !rendered_in_order {
            return false;
        }

        let visible = self.visible_cards().map(|card| card.title.as_str());
        let selected = store
            .list_all()
            .iter()
            .filter(|task| mode.shows_task(task))
            .map(Task::title);
        visible.eq(selected)
    }
}
