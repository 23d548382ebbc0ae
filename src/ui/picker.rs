use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use crate::app::{AppState, LoadState};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

fn spinner_frame(app: &AppState) -> &'static str {
    let tick = (app.started_at.elapsed().as_millis() / 100) as usize;
    SPINNER[tick % SPINNER.len()]
}

/// The option list: one formatted label per visible person, paged around the highlight.
pub fn render_people_list(f: &mut Frame, area: Rect, app: &mut AppState) {
    let block = Block::default()
        .title(format!("People ({}/{})", app.people.len(), app.people_all.len()))
        .title_style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));

    match &app.load {
        LoadState::Loading => {
            let p = Paragraph::new(format!("{} Loading…", spinner_frame(app)))
                .style(Style::default().fg(app.theme.muted))
                .block(block);
            f.render_widget(p, area);
            return;
        }
        LoadState::Failed(msg) => {
            let p = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Could not load people",
                    Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
                )),
                Line::raw(msg.clone()),
            ])
            .wrap(Wrap { trim: false })
            .block(block);
            f.render_widget(p, area);
            return;
        }
        LoadState::Ready => {}
    }

    if app.people.is_empty() {
        let p = Paragraph::new("No options")
            .style(Style::default().fg(app.theme.muted))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let body_height = area.height.saturating_sub(2) as usize;
    if body_height > 0 {
        app.rows_per_page = body_height;
    }
    let start = (app.highlighted / app.rows_per_page) * app.rows_per_page;
    let end = (start + app.rows_per_page).min(app.people.len());

    let items: Vec<ListItem> = app.people[start..end]
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let marker = if app.is_selected(p) { "● " } else { "  " };
            let mut style = Style::default().fg(app.theme.text);
            if start + i == app.highlighted {
                style = style
                    .fg(app.theme.highlight_fg)
                    .bg(app.theme.highlight_bg)
                    .add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{marker}{}", p.label())).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
