//! Keybindings configuration for the TUI.

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for todo-cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings for every TUI view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings while the card board has focus.
    pub board: BoardKeyBindings,
    /// Keybindings while the input form has focus.
    pub form: FormKeyBindings,
}

/// Keybindings for the card board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Select the next card.
    pub down: Vec<String>,
    /// Select the previous card.
    pub up: Vec<String>,
    /// Delete the selected card and its task.
    pub delete: Vec<String>,
    /// Sort tasks by title.
    pub sort: Vec<String>,
    /// Show only high-priority cards.
    pub show_high_priority: Vec<String>,
    /// Return from the high-priority view.
    pub back: Vec<String>,
    /// Move focus to the input form.
    pub focus_form: Vec<String>,
}

/// Keybindings for the input form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormKeyBindings {
    /// Submit the form as a new task.
    pub submit: Vec<String>,
    /// Focus the next field.
    pub next_field: Vec<String>,
    /// Focus the previous field.
    pub prev_field: Vec<String>,
    /// Return focus to the board.
    pub leave: Vec<String>,
    /// Toggle the high-priority checkbox.
    pub toggle_priority: Vec<String>,
    /// Insert a line break into the description.
    pub newline: Vec<String>,
}

impl Default for BoardKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            delete: vec_of_strings!["x", "Delete"],
            sort: vec_of_strings!["s"],
            show_high_priority: vec_of_strings!["p"],
            back: vec_of_strings!["b", "Esc"],
            focus_form: vec_of_strings!["a", "i", "Enter"],
        }
    }
}

impl Default for FormKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            next_field: vec_of_strings!["Tab"],
            prev_field: vec_of_strings!["BackTab"],
            leave: vec_of_strings!["Esc"],
            toggle_priority: vec_of_strings!["Ctrl+p"],
            newline: vec_of_strings!["Alt+Enter"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux: `~/.config/todo-cards/config.toml`
/// On macOS: `~/Library/Application Support/todo-cards/config.toml`
/// On Windows: `%APPDATA%\todo-cards\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todo-cards").join("config.toml"))
}

/// Generate the default configuration as a commented TOML document.
pub fn generate_default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&Config::default()).context("failed to serialize default configuration")?;

    let header = r#"# todo-cards configuration
#
# [tui.keybindings.board] applies while the card list has focus,
# [tui.keybindings.form] while the input form has focus.
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "BackTab", "Backspace", "Delete", "Space"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+p", "Alt+Enter", "Shift+Up"
#
# Note: When this file exists, ALL default keybindings are disabled.
# Make sure to define all actions you need.

"#;

    Ok(format!("{header}{body}"))
}

/// Load configuration from a TOML file.
///
/// `None` falls back to [`default_config_path`]. A missing file yields
/// `Ok(None)`; unreadable or malformed files are errors.
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "BackTab" -> `KeyCode::BackTab`
/// - "Ctrl+p" -> `KeyCode::Char('p')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        bail!("empty key string");
    };

    let mut modifiers = KeyModifiers::NONE;
    for &modifier in modifier_parts {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "BackTab" => Ok(KeyCode::BackTab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        "Space" => Ok(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("unknown key: {other}"),
    }
}

/// Terminals report SHIFT alongside upper-case characters and BackTab; the
/// code alone carries that information once `Shift+<char>` is upper-cased.
fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char(ch) => {
            let ch = if shifted { upper_case(ch) } else { ch };
            (KeyCode::Char(ch), key.modifiers.difference(KeyModifiers::SHIFT))
        }
        KeyCode::BackTab => (key.code, key.modifiers.difference(KeyModifiers::SHIFT)),
        code => (code, key.modifiers),
    }
}

/// Single-character upper case; characters without one keep their form.
fn upper_case(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Card board with the input form available.
    Board,
    /// Card board showing only high-priority cards.
    PriorityBoard,
    /// Input form.
    Form,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Board
    /// Quit the application.
    Quit,
    /// Select the next card.
    Down,
    /// Select the previous card.
    Up,
    /// Delete the selected card.
    Delete,
    /// Sort by title.
    Sort,
    /// Enter the high-priority view.
    ShowHighPriority,
    /// Leave the high-priority view.
    Back,
    /// Focus the input form.
    FocusForm,

    // Form
    /// Submit the form.
    Submit,
    /// Next form field.
    NextField,
    /// Previous form field.
    PrevField,
    /// Leave the form.
    Leave,
    /// Toggle the priority checkbox.
    TogglePriority,
    /// Insert a line break.
    Newline,
}

/// Validate the whole configuration file.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_keybindings_config(&config.tui.keybindings)
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for (view, bindings) in [("board", config.board_bindings()), ("form", config.form_bindings())] {
        validate_non_empty_bindings(view, &bindings)?;
        validate_key_expressions(view, &bindings)?;
        validate_view_keybindings(view, &bindings)?;
    }
    Ok(())
}

fn validate_non_empty_bindings(view: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    for (action, keys) in bindings {
        if keys.is_empty() {
            bail!("{view}.{action} must have at least one key binding");
        }
    }
    Ok(())
}

fn validate_key_expressions(view: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    for (action, keys) in bindings {
        for key in *keys {
            parse_key(key).with_context(|| format!("invalid key '{key}' in {view}.{action}"))?;
        }
    }
    Ok(())
}

fn validate_view_keybindings(view: &str, bindings: &[(&str, &[String])]) -> Result<()> {
    let mut key_to_actions: HashMap<(KeyCode, KeyModifiers), Vec<&str>> = HashMap::new();

    for (action, keys) in bindings {
        for key in *keys {
            let parsed = parse_key(key)?;
            let actions = key_to_actions.entry(normalize(&parsed)).or_default();
            if !actions.contains(action) {
                actions.push(*action);
            }
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_values()
        .filter(|actions| actions.len() > 1)
        .collect();
    conflicts.sort();
    if let Some(actions) = conflicts.first() {
        bail!("a key is bound to multiple actions in {view}: {actions:?}");
    }

    Ok(())
}

impl KeyBindingsConfig {
    fn board_bindings(&self) -> Vec<(&'static str, &[String])> {
        let board = &self.board;
        vec![
            ("quit", board.quit.as_slice()),
            ("down", board.down.as_slice()),
            ("up", board.up.as_slice()),
            ("delete", board.delete.as_slice()),
            ("sort", board.sort.as_slice()),
            ("show_high_priority", board.show_high_priority.as_slice()),
            ("back", board.back.as_slice()),
            ("focus_form", board.focus_form.as_slice()),
        ]
    }

    fn form_bindings(&self) -> Vec<(&'static str, &[String])> {
        let form = &self.form;
        vec![
            ("submit", form.submit.as_slice()),
            ("next_field", form.next_field.as_slice()),
            ("prev_field", form.prev_field.as_slice()),
            ("leave", form.leave.as_slice()),
            ("toggle_priority", form.toggle_priority.as_slice()),
            ("newline", form.newline.as_slice()),
        ]
    }

    /// Generate the footer help text for a view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::Board => self.generate_board_help(),
            ViewType::PriorityBoard => self.generate_priority_board_help(),
            ViewType::Form => self.generate_form_help(),
        }
    }

    fn generate_board_help(&self) -> String {
        let board = &self.board;
        format!(
            "{}:move {}:add {}:delete {}:sort {}:high priority {}:quit",
            format_key_pair(&board.down, &board.up),
            format_first_key(&board.focus_form),
            format_first_key(&board.delete),
            format_first_key(&board.sort),
            format_first_key(&board.show_high_priority),
            format_first_key(&board.quit),
        )
    }

    fn generate_priority_board_help(&self) -> String {
        let board = &self.board;
        format!(
            "{}:move {}:delete {}:back {}:quit",
            format_key_pair(&board.down, &board.up),
            format_first_key(&board.delete),
            format_first_key(&board.back),
            format_first_key(&board.quit),
        )
    }

    fn generate_form_help(&self) -> String {
        let form = &self.form;
        format!(
            "{}:add {}:field {}:priority {}:new line {}:back to list",
            format_first_key(&form.submit),
            format_key_pair(&form.next_field, &form.prev_field),
            format_first_key(&form.toggle_priority),
            format_first_key(&form.newline),
            format_first_key(&form.leave),
        )
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        let actual = normalize(key);
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| normalize(&expected) == actual)
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action as A;

        match (view, action) {
            (ViewType::Board | ViewType::PriorityBoard, A::Quit) => &self.board.quit,
            (ViewType::Board | ViewType::PriorityBoard, A::Down) => &self.board.down,
            (ViewType::Board | ViewType::PriorityBoard, A::Up) => &self.board.up,
            (ViewType::Board | ViewType::PriorityBoard, A::Delete) => &self.board.delete,
            (ViewType::Board, A::Sort) => &self.board.sort,
            (ViewType::Board, A::ShowHighPriority) => &self.board.show_high_priority,
            (ViewType::Board, A::FocusForm) => &self.board.focus_form,
            (ViewType::PriorityBoard, A::Back) => &self.board.back,

            (ViewType::Form, A::Submit) => &self.form.submit,
            (ViewType::Form, A::NextField) => &self.form.next_field,
            (ViewType::Form, A::PrevField) => &self.form.prev_field,
            (ViewType::Form, A::Leave) => &self.form.leave,
            (ViewType::Form, A::TogglePriority) => &self.form.toggle_priority,
            (ViewType::Form, A::Newline) => &self.form.newline,

            _ => &[],
        }
    }
}

fn format_first_key(keys: &[String]) -> String {
    keys.first()
        .map_or_else(|| "?".to_string(), |k| format_key_display(k))
}

fn format_key_pair(first: &[String], second: &[String]) -> String {
    format!("{}/{}", format_first_key(first), format_first_key(second))
}

fn format_key_display(key: &str) -> String {
    match key {
        "Enter" => "↵".to_string(),
        "Backspace" => "BS".to_string(),
        "Delete" => "Del".to_string(),
        "BackTab" => "S-Tab".to_string(),
        "Up" => "↑".to_string(),
        "Down" => "↓".to_string(),
        "Left" => "←".to_string(),
        "Right" => "→".to_string(),
        "PageUp" => "PgUp".to_string(),
        "PageDown" => "PgDn".to_string(),
        other if other.starts_with("Ctrl+") || other.starts_with("Alt+") || other.starts_with("Shift+") => {
            other.replace('+', "-")
        }
        other => other.to_string(),
    }
}
