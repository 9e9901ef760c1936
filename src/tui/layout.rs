use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActivePane, TuiApp};
use crate::tui::settings::FIELDS;
use crate::tui::ABOUT_URL;

pub fn render(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Stories pane
            Constraint::Min(8),         // Preview pane
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    render_stories_pane(frame, app, chunks[0]);
    render_preview_pane(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    if app.settings.is_some() {
        render_settings_overlay(frame, app);
    }
    if app.show_about {
        render_about_overlay(frame);
    }
}

fn render_stories_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Stories;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" Stories ({}) ", app.stories.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.stories.is_empty() {
        // Empty view: either the loading notice or one of the two
        // empty-state messages
        let message = if app.is_loading {
            "Loading stories..."
        } else {
            app.empty_state.map(|s| s.message()).unwrap_or("")
        };

        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .stories
        .iter()
        .map(|story| {
            let date = story
                .published_at
                .map(|d| d.format("%m/%d").to_string())
                .unwrap_or_else(|| "     ".to_string());

            let content = match &story.author {
                Some(author) => format!("{} {} (by {})", date, story.headline, author),
                None => format!("{} {}", date, story.headline),
            };

            ListItem::new(content)
        })
        .collect();

    let highlight_style = if is_active {
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.story_list_state);
}

fn render_preview_pane(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let is_active = app.active_pane == ActivePane::Preview;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (title, content) = if let Some(story) = app.selected_story() {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            story.headline.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        // Metadata
        if let Some(author) = &story.author {
            lines.push(Line::from(Span::styled(
                format!("By: {}", author),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(date) = story.published_at {
            lines.push(Line::from(Span::styled(
                format!("Date: {}", date.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("Link: {}", story.short_url),
            Style::default().fg(Color::Blue),
        )));
        if let Some(thumbnail) = &story.thumbnail {
            lines.push(Line::from(Span::styled(
                format!("Thumbnail: {}", thumbnail),
                Style::default().fg(Color::Blue),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("─".repeat(area.width.saturating_sub(2) as usize)));
        lines.push(Line::from(""));

        // Trail text arrives with markup; strip it for the terminal
        let trail = strip_html(story.display_trail());
        for line in trail.lines() {
            lines.push(Line::from(line.to_string()));
        }

        (format!(" {} ", story.headline), Text::from(lines))
    } else {
        (" Preview ".to_string(), Text::from("No story selected"))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let status = if app.is_loading {
        "Loading stories...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else {
        "j/k:Navigate  Tab:Pane  Enter/o:Open  R:Refresh  s:Settings  a:About  q:Quit".to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(Color::White).bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

fn render_settings_overlay(frame: &mut Frame, app: &TuiApp) {
    let pane = match &app.settings {
        Some(pane) => pane,
        None => return,
    };

    let area = centered_rect(70, (FIELDS.len() + 4) as u16, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (i, field) in FIELDS.iter().enumerate() {
        let selected = i == pane.selected;

        let value = match (&pane.editing, selected) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => field.summary(&app.prefs),
        };

        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let marker = if selected { "> " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{:<20}{}", marker, field.label(), value),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter:Edit/Toggle  Esc:Back",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default().title(" Settings ").borders(Borders::ALL);
    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_about_overlay(frame: &mut Frame) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            concat!("Broadsheet ", env!("CARGO_PKG_VERSION")),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("A terminal reader for Guardian news."),
        Line::from(""),
        Line::from("Data from the Guardian Open Platform:"),
        Line::from(Span::styled(ABOUT_URL, Style::default().fg(Color::Blue))),
        Line::from(""),
        Line::from(Span::styled(
            "o/Enter:Open link  Any other key:Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().title(" About ").borders(Borders::ALL);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = r.width * percent_x / 100;
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(r.height),
    }
}

fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    let mut last_was_space = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => {
                if c.is_whitespace() {
                    if !last_was_space {
                        result.push(' ');
                        last_was_space = true;
                    }
                } else {
                    result.push(c);
                    last_was_space = false;
                }
            }
            _ => {}
        }
    }

    result.trim().to_string()
}
