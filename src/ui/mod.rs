pub mod components;
pub mod person;
pub mod picker;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, ModalState};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(body[1]);

    render_search_input(f, root[0], app);
    picker::render_people_list(f, body[0], app);
    person::render_address(f, right[0], app);
    person::render_details(f, right[1], app);
    components::render_status_bar(f, root[2], app);

    if let Some(ModalState::Help { scroll }) = app.modal {
        components::render_help_modal(f, f.area(), app, scroll);
    }
}

fn render_search_input(f: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let (text, style) = match app.input_mode {
        InputMode::Search => (
            format!("{}▏", app.search_query),
            Style::default().fg(app.theme.highlight_fg),
        ),
        _ if app.search_query.is_empty() => (
            "press / to search".to_string(),
            Style::default().fg(app.theme.muted),
        ),
        _ => (app.search_query.clone(), Style::default().fg(app.theme.text)),
    };
    let title = match app.selected_person() {
        Some(p) => format!("Name: {}", p.label()),
        None => "Name".to_string(),
    };
    let p = Paragraph::new(text).style(style).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(app.theme.header_fg))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .style(Style::default().bg(app.theme.header_bg)),
    );
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Keymap, PickerConfig, Theme};
    use crate::people::{Address, Person};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        screen(&terminal)
    }

    #[test]
    fn renders_loading_then_address_of_selection() {
        let mut app = AppState::with_parts(&PickerConfig::default(), Theme::mocha(), Keymap::default());
        assert!(draw(&mut app).contains("Loading"));

        app.on_people_loaded(Ok(vec![Person {
            id: 1,
            name: "Leanne Graham".into(),
            address: Address {
                street: "Kulas Light".into(),
                suite: "Apt. 556".into(),
                city: "Gwenborough".into(),
                zipcode: "92998-3874".into(),
                ..Default::default()
            },
            ..Default::default()
        }]));
        app.select_highlighted();
        let out = draw(&mut app);
        assert!(out.contains("Graham Jr., Leanne (Mr.)"));
        assert!(out.contains("Kulas Light, Apt. 556"));
        assert!(out.contains("Gwenborough, 92998-3874"));
    }

    #[test]
    fn renders_fetch_error() {
        let mut app = AppState::with_parts(&PickerConfig::default(), Theme::mocha(), Keymap::default());
        app.on_people_loaded(Err(crate::people::FetchError::Decode("expected array".into())));
        let out = draw(&mut app);
        assert!(out.contains("expected array"));
        assert!(!out.contains("Loading"));
    }
}
