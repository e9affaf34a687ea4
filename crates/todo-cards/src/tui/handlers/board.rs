use crossterm::event::KeyEvent;

use super::super::view::{Focus, Ui};
use crate::config::Action;

impl Ui {
    pub(in crate::tui) fn handle_board_key(&mut self, key: KeyEvent) {
        let view = self.view_type();
        let matches = |action| self.keybindings.matches(view, action, &key);

        if matches(Action::Quit) {
            self.should_quit = true;
        } else if matches(Action::Down) {
            self.app.select_next();
        } else if matches(Action::Up) {
            self.app.select_prev();
        } else if matches(Action::Delete) {
            self.delete_selected();
        } else if matches(Action::Sort) {
            self.sort();
        } else if matches(Action::ShowHighPriority) {
            self.show_high_priority();
        } else if matches(Action::Back) {
            self.back();
        } else if matches(Action::FocusForm) {
            self.focus = Focus::Form;
        }
    }

    fn delete_selected(&mut self) {
        if !self.app.has_visible_cards() {
            self.error("No card selected");
            return;
        }
        match self.app.delete_selected() {
            Some(title) => self.info(format!("Deleted \"{title}\"")),
            None => self.error("The selected card had no stored task"),
        }
    }

    fn sort(&mut self) {
        if self.app.sort() {
            self.info("Sorted by title");
        }
    }

    fn show_high_priority(&mut self) {
        if self.app.show_high_priority() {
            self.focus = Focus::Board;
            self.info("Showing high-priority tasks only");
        }
    }

    fn back(&mut self) {
        if self.app.back() {
            self.info("Showing all tasks");
        }
    }
}
