use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};
use todo_cards_core::DisplayMode;

use super::app::App;
use super::constants::{FORM_PANEL_HEIGHT, UI_MESSAGE_TTL_SECS};
use super::form::FormState;
use crate::config::{KeyBindingsConfig, ViewType};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Card list.
    Board,
    /// "New task" form; only reachable while the form is shown.
    Form,
}

pub(super) struct Ui {
    pub(super) app: App,
    pub(super) form: FormState,
    pub(super) focus: Focus,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    pub(super) keybindings: KeyBindingsConfig,
}

impl Ui {
    pub(super) const CARD_LIST_MIN_HEIGHT: u16 = 3;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_HEIGHT: u16 = Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_HEIGHT;

    pub(super) fn new(app: App, keybindings: KeyBindingsConfig) -> Self {
        Self {
            app,
            form: FormState::default(),
            focus: Focus::Board,
            message: None,
            should_quit: false,
            keybindings,
        }
    }

    /// Keybinding context for the current focus and display mode.
    pub(super) const fn view_type(&self) -> ViewType {
        match (self.focus, self.app.mode()) {
            (Focus::Form, DisplayMode::Normal) => ViewType::Form,
            (_, DisplayMode::PriorityOnly) => ViewType::PriorityBoard,
            (Focus::Board, DisplayMode::Normal) => ViewType::Board,
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let mut constraints = Vec::with_capacity(3);
        let show_form = self.app.mode().controls_visible();
        if show_form {
            constraints.push(Constraint::Length(FORM_PANEL_HEIGHT));
        }
        constraints.push(Constraint::Min(Self::CARD_LIST_MIN_HEIGHT));
        constraints.push(Constraint::Length(Self::STATUS_FOOTER_HEIGHT));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(f.area());

        let mut rows = chunks.iter().copied();
        if show_form && let Some(area) = rows.next() {
            self.draw_form(f, area);
        }
        if let Some(area) = rows.next() {
            self.draw_card_list(f, area);
        }
        if let Some(area) = rows.next() {
            self.draw_status(f, area);
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Info)
    }

    fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Error)
    }

    fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }

    #[cfg(test)]
    pub(super) fn backdate(&mut self, by: Duration) {
        if let Some(earlier) = self.created_at.checked_sub(by) {
            self.created_at = earlier;
        }
    }
}
