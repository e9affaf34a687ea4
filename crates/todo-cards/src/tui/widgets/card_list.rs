use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use todo_cards_core::{Card, DisplayMode};

use super::super::constants::{
    CARD_DELETE_MARKER, CARD_DESCRIPTION_INDENT, CARD_LIST_HIGHLIGHT_SYMBOL, PRIORITY_CARD_BG,
};
use super::super::view::{Focus, Ui};
use super::util::truncate_with_ellipsis;

impl Ui {
    pub(in crate::tui) fn draw_card_list(&self, f: &mut Frame<'_>, area: Rect) {
        let title_width = usize::from(area.width)
            .saturating_sub(2)
            .saturating_sub(CARD_LIST_HIGHLIGHT_SYMBOL.chars().count())
            .saturating_sub(CARD_DELETE_MARKER.len());

        let mode = self.app.mode();
        let items: Vec<ListItem<'_>> = if self.app.has_visible_cards() {
            self.app
                .visible_cards()
                .map(|card| card_item(card, title_width))
                .collect()
        } else {
            let message = match mode {
                DisplayMode::Normal => "No tasks yet",
                DisplayMode::PriorityOnly => "No high-priority tasks",
            };
            vec![ListItem::new(Line::styled(message, Style::default().fg(Color::DarkGray)))]
        };

        let heading = match mode {
            DisplayMode::Normal => "Tasks",
            DisplayMode::PriorityOnly => "High-priority tasks",
        };
        let border_style = if self.focus == Focus::Board {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{heading} ({})", self.app.controller().board().visible_len()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(CARD_LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        if self.app.has_visible_cards() {
            state.select(Some(self.app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

fn card_item(card: &Card, title_width: usize) -> ListItem<'_> {
    let title = truncate_with_ellipsis(card.title(), title_width);
    let mut lines = vec![Line::from(vec![
        Span::styled(CARD_DELETE_MARKER, Style::default().fg(Color::Red)),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
    ])];
    lines.extend(
        card.description()
            .lines()
            .map(|line| Line::raw(format!("{CARD_DESCRIPTION_INDENT}{line}"))),
    );

    let item = ListItem::new(lines);
    if card.is_highlighted() {
        item.style(Style::default().bg(PRIORITY_CARD_BG).fg(Color::Black))
    } else {
        item
    }
}
