use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;

/// `street, suite` over `city, zipcode` for the selection; empty without one.
pub fn render_address(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.selected_person() {
        Some(p) => format!("{}\n{}", p.address.street_line(), p.address.city_line()),
        None => String::new(),
    };
    let p = Paragraph::new(text).style(Style::default().fg(app.theme.text)).block(
        Block::default()
            .title("Address")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(p, area);
}

pub fn render_details(f: &mut Frame, area: Rect, app: &AppState) {
    let text = match app.selected_person() {
        Some(p) => format!(
            "Username: {}\nEmail: {}\nPhone: {}\nWebsite: {}\nCompany: {}\n  \"{}\"\nGeo: {}, {}",
            p.username,
            p.email,
            p.phone,
            p.website,
            p.company.name,
            p.company.catch_phrase,
            p.address.geo.lat,
            p.address.geo.lng,
        ),
        None => "Select a person with Enter".to_string(),
    };
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, area);
}
