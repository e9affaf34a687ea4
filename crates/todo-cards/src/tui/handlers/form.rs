use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_cards_core::{AddOutcome, ValidationErrors};

use super::super::view::{Focus, Ui};
use crate::config::Action;

impl Ui {
    pub(in crate::tui) fn handle_form_key(&mut self, key: KeyEvent) {
        let view = self.view_type();
        let matches = |action| self.keybindings.matches(view, action, &key);

        if matches(Action::Leave) {
            self.focus = Focus::Board;
        } else if matches(Action::Newline) {
            self.form.insert_newline();
        } else if matches(Action::Submit) {
            self.submit_form();
        } else if matches(Action::NextField) {
            self.form.focus_next();
        } else if matches(Action::PrevField) {
            self.form.focus_prev();
        } else if matches(Action::TogglePriority) {
            self.form.toggle_priority();
        } else {
            self.edit_form(key);
        }
    }

    fn edit_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.form.insert_char(ch);
            }
            _ => {}
        }
    }

    pub(in crate::tui) fn submit_form(&mut self) {
        match self.app.add(&self.form.to_raw()) {
            AddOutcome::Added(_) => {
                let title = self.form.title.trim().to_owned();
                self.form.clear();
                self.info(format!("Added \"{title}\""));
            }
            AddOutcome::Rejected(errors) => self.error(format!("Task not added: {}", reason_list(&errors))),
            AddOutcome::Unavailable => {
                self.focus = Focus::Board;
                self.error("The form is hidden while showing high-priority tasks");
            }
        }
    }
}

fn reason_list(errors: &ValidationErrors) -> String {
    errors.iter().map(|reason| reason.to_string()).collect::<Vec<_>>().join(", ")
}
