use todo_cards_core::RawTaskInput;
use unicode_segmentation::UnicodeSegmentation;

/// Input form fields in focus order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum FormField {
    #[default]
    Title,
    Description,
    Priority,
}

impl FormField {
    pub(super) const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    pub(super) const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Description => Self::Title,
            Self::Priority => Self::Description,
        }
    }
}

/// Contents of the "new task" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FormState {
    pub(super) title: String,
    pub(super) description: String,
    pub(super) priority: bool,
    pub(super) field: FormField,
}

impl FormState {
    pub(super) fn to_raw(&self) -> RawTaskInput {
        RawTaskInput::new(self.title.clone(), self.description.clone(), self.priority)
    }

    /// Type a character into the focused field. Space toggles the checkbox.
    pub(super) fn insert_char(&mut self, ch: char) {
        match self.field {
            FormField::Title => self.title.push(ch),
            FormField::Description => self.description.push(ch),
            FormField::Priority if ch == ' ' => self.toggle_priority(),
            FormField::Priority => {}
        }
    }

    /// Line breaks are only accepted by the description.
    pub(super) fn insert_newline(&mut self) {
        if self.field == FormField::Description {
            self.description.push('\n');
        }
    }

    /// Remove the last grapheme cluster of the focused text field.
    pub(super) fn backspace(&mut self) {
        let text = match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Priority => return,
        };
        if let Some((start, _)) = text.grapheme_indices(true).next_back() {
            text.truncate(start);
        }
    }

    pub(super) const fn toggle_priority(&mut self) {
        self.priority = !self.priority;
    }

    pub(super) const fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub(super) const fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Empty every field and return focus to the title.
    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }
}
