use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use todo_cards_core::ValidationError;

use super::super::constants::{FORM_CARET, FORM_DESCRIPTION_HEIGHT};
use super::super::form::FormField;
use super::super::view::{Focus, Ui};
use super::util::checkbox;

impl Ui {
    pub(in crate::tui) fn draw_form(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("New task")
            .borders(Borders::ALL)
            .border_style(focus_style(self.focus == Focus::Form));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(FORM_DESCRIPTION_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let indicators = self.app.controller().indicators();

        let title_editing = self.is_editing(FormField::Title);
        f.render_widget(
            text_field("Title", field_text(&self.form.title, title_editing), title_editing),
            rows[0],
        );
        f.render_widget(
            indicator_line(&[
                (indicators.title_empty, ValidationError::EmptyTitle),
                (indicators.title_duplicate, ValidationError::DuplicateTitle),
            ]),
            rows[1],
        );

        let description_editing = self.is_editing(FormField::Description);
        let description = field_text(&self.form.description, description_editing);
        // Keep the last line, caret included, inside the box.
        let visible_rows = usize::from(FORM_DESCRIPTION_HEIGHT.saturating_sub(2));
        let overflow = description.lines.len().saturating_sub(visible_rows);
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
        f.render_widget(
            text_field("Description", description, description_editing).scroll((scroll, 0)),
            rows[2],
        );
        f.render_widget(
            indicator_line(&[(indicators.description_empty, ValidationError::EmptyDescription)]),
            rows[3],
        );

        let priority_focused = self.is_editing(FormField::Priority);
        let priority = Line::from(vec![
            Span::styled(
                checkbox(self.form.priority),
                focus_style(priority_focused).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" High priority"),
        ]);
        f.render_widget(Paragraph::new(priority), rows[4]);
    }

    fn is_editing(&self, field: FormField) -> bool {
        self.focus == Focus::Form && self.form.field == field
    }
}

/// Field contents with the caret appended while `editing`; a trailing line
/// break puts the caret on a line of its own.
fn field_text(value: &str, editing: bool) -> Text<'static> {
    let mut text = Text::raw(value.to_owned());
    if editing {
        match text.lines.last_mut() {
            Some(line) if !value.ends_with('\n') => line.push_span(Span::raw(FORM_CARET)),
            _ => text.push_line(Line::raw(FORM_CARET)),
        }
    }
    text
}

fn text_field(label: &'static str, text: Text<'static>, editing: bool) -> Paragraph<'static> {
    Paragraph::new(text).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(focus_style(editing)),
    )
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn indicator_line(entries: &[(bool, ValidationError)]) -> Paragraph<'static> {
    let shown: Vec<String> = entries
        .iter()
        .filter(|(raised, _)| *raised)
        .map(|(_, reason)| capitalize(&reason.to_string()))
        .collect();
    Paragraph::new(shown.join(" / ")).style(Style::default().fg(Color::Red))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
