//! Frame rendering: search box, show cards, episode modal, error dialog.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::view::Card;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Search box
                Constraint::Min(1),    // Show cards
                Constraint::Length(1), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_search_box(f, app, chunks[0]);
    draw_show_cards(f, app, chunks[1]);
    draw_status(f, app, chunks[2]);

    if app.episodes_for.is_some() {
        draw_episode_modal(f, app);
    }
    if app.error.is_some() {
        draw_error_dialog(f, app);
    }
}

fn draw_search_box(f: &mut Frame, app: &App, area: Rect) {
    let border_style = match app.focus {
        Focus::Search => Style::default().fg(Color::Yellow),
        Focus::Results => Style::default(),
    };
    let search = Paragraph::new(format!("Search: {}", app.query)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Show Search"),
    );
    f.render_widget(search, area);
}

fn draw_show_cards(f: &mut Frame, app: &mut App, area: Rect) {
    if app.shows.is_empty() {
        let welcome = Paragraph::new("Search for a show to see results here.")
            .block(Block::default().borders(Borders::ALL).title("Shows"));
        f.render_widget(welcome, area);
        return;
    }

    let items: Vec<ListItem> = app.shows.cards().iter().map(card_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Shows"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.shows.state);
}

fn card_item(card: &Card) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.image_url.clone(),
            Style::default().fg(Color::Blue),
        )),
    ];
    if !card.summary.is_empty() {
        // Raw API text, markup included.
        lines.push(Line::from(card.summary.clone()));
    }
    lines.push(Line::from(Span::styled(
        "[ Enter: episodes ]",
        Style::default().fg(Color::Green),
    )));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn draw_episode_modal(f: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let title = match &app.episodes_for {
        Some(name) => format!("Episodes: {}", name),
        None => "Episodes".to_string(),
    };
    let items: Vec<ListItem> = app
        .episodes
        .lines()
        .iter()
        .map(|line| ListItem::new(line.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom("Esc to close"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Green))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.episodes.state);
}

fn draw_error_dialog(f: &mut Frame, app: &App) {
    let Some(message) = &app.error else { return };

    let area = centered_rect(50, 25, f.area());
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(message.clone())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .title_bottom("Enter to dismiss"),
        );
    f.render_widget(dialog, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Centered popup area, as a percentage of the surrounding rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
