//! Shared constants for the TUI to keep layout and timing in sync.

use ratatui::style::Color;

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside the selected card.
pub const CARD_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Delete affordance drawn in front of every card title.
pub const CARD_DELETE_MARKER: &str = "[x] ";
/// Indentation applied to description lines under a card title.
pub const CARD_DESCRIPTION_INDENT: &str = "    ";
/// Background of high-priority cards (light red, `#ffcccb`).
pub const PRIORITY_CARD_BG: Color = Color::Rgb(0xff, 0xcc, 0xcb);
/// Rows of the description box inside the form, borders included.
pub const FORM_DESCRIPTION_HEIGHT: u16 = 5;
/// Total rows of the input form: title box, its indicator line, description
/// box, its indicator line, checkbox and the outer border.
pub const FORM_PANEL_HEIGHT: u16 = 3 + 1 + FORM_DESCRIPTION_HEIGHT + 1 + 1 + 2;
/// Caret appended to the focused text field.
pub const FORM_CARET: &str = "█";
