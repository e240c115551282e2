use crate::application::{App, AppMode, Button, TerminalPicker};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render_ui<S, P>(f: &mut Frame, app: &App<S, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_location(f, app, chunks[1]);
    render_contents(f, app, chunks[2]);
    render_buttons(f, app, chunks[3]);
    render_status_bar(f, app, chunks[4]);

    if let Some(picker) = app.picker.as_ref() {
        render_picker(f, picker);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("recstore - Removable Storage Record Store")
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_location<S, P>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let available_style = match app.available_text.as_str() {
        "True" => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::Red),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Location:  ", Style::default().fg(Color::Yellow)),
            Span::raw(app.location_text.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Available: ", Style::default().fg(Color::Yellow)),
            Span::styled(app.available_text.as_str(), available_style),
        ]),
    ];
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Document"));
    f.render_widget(widget, area);
}

fn render_contents<S, P>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let widget = Paragraph::new(app.file_contents.as_str())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("File contents"));
    f.render_widget(widget, area);
}

fn render_buttons<S, P>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (button, cell) in Button::ALL.iter().zip(cells.iter()) {
        let style = if *button == app.focused && matches!(app.mode, AppMode::Normal) {
            Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let hotkey = button.label().chars().next().unwrap_or(' ').to_ascii_lowercase();
        let widget = Paragraph::new(format!("{} ({})", button.label(), hotkey))
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, *cell);
    }
}

fn render_status_bar<S, P>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "s: save | f: find | r: read | Tab/←→: focus | Enter: press | q: quit".to_string()
        }),
        AppMode::Picker => "↑↓: browse | Enter: choose / open folder | Esc: cancel".to_string(),
    };
    let style = match (app.mode, app.status_message.is_some()) {
        (AppMode::Picker, _) => Style::default().fg(Color::Yellow),
        (AppMode::Normal, true) => Style::default().fg(Color::Magenta),
        (AppMode::Normal, false) => Style::default(),
    };
    let widget = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(widget, area);
}

fn render_picker(f: &mut Frame, picker: &TerminalPicker) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };
    f.render_widget(Clear, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)])
        .split(popup_area);

    let input = Paragraph::new(picker.input.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.title())
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|entry| {
            if entry.is_dir {
                ListItem::new(format!("{}/", entry.name)).style(Style::default().fg(Color::Blue))
            } else {
                ListItem::new(entry.name.as_str())
            }
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.listing_dir().display().to_string()),
        )
        .highlight_style(Style::default().bg(Color::LightBlue).fg(Color::Black));
    let mut state = ListState::default();
    state.select(picker.selected);
    f.render_stateful_widget(list, chunks[1], &mut state);

    if let Some(error) = picker.error.as_ref() {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[2],
        );
    }
}
