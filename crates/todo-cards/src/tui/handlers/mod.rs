use crossterm::event::{KeyEvent, KeyEventKind};

use super::view::{Focus, Ui};

pub(super) mod board;
pub(super) mod form;

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.focus {
            Focus::Board => self.handle_board_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }
}
