//! Shared UI components (status bar, modal helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::{KeyAction, format_action};
use crate::app::{AppState, InputMode, LoadState};

/// Render the bottom status bar with mode, counts and load state.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "MODAL",
    };
    let load = match &app.load {
        LoadState::Loading => "loading".to_string(),
        LoadState::Ready => "ready".to_string(),
        LoadState::Failed(msg) => format!("error: {msg}"),
    };
    let selected = app
        .selected_id
        .map(|id| format!("  selected:#{id}"))
        .unwrap_or_default();
    let msg = format!(
        "mode: {mode}  people:{}/{}{selected}  {load}  ?: help  q: quit",
        app.people.len(),
        app.people_all.len(),
    );
    let style = match app.load {
        LoadState::Failed(_) => Style::default().fg(app.theme.error).bg(app.theme.status_bg),
        _ => Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg),
    };
    f.render_widget(Paragraph::new(msg).style(style), area);
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

const HELP_ROWS: [(KeyAction, &str); 10] = [
    (KeyAction::MoveUp, "Move up"),
    (KeyAction::MoveDown, "Move down"),
    (KeyAction::PageUp, "Previous page"),
    (KeyAction::PageDown, "Next page"),
    (KeyAction::StartSearch, "Search (type to filter, Enter picks, Esc cancels)"),
    (KeyAction::ClearSearch, "Clear search"),
    (KeyAction::SelectHighlighted, "Select highlighted person"),
    (KeyAction::ClearSelection, "Clear selection"),
    (KeyAction::OpenHelp, "Open this help"),
    (KeyAction::Quit, "Quit"),
];

/// Key reference built from the live keymap, so rebinding shows up here.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let width = 72u16.min(area.width.saturating_sub(4)).max(40);
    let height = 18u16.min(area.height.saturating_sub(4)).max(8);
    let rect = centered_rect(width, height, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Help", Style::default().add_modifier(Modifier::BOLD))),
        Line::raw(""),
    ];
    for (action, text) in HELP_ROWS {
        let keys = app.keymap.keys_for(action);
        let keys = if keys.is_empty() {
            format!("({} unbound)", format_action(action))
        } else {
            keys.join(" / ")
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{text}: ")),
            Span::styled(keys, Style::default().add_modifier(Modifier::ITALIC)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Esc / Enter / q closes; Up / Down scrolls",
        Style::default().fg(app.theme.muted),
    )));

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
