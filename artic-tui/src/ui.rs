//! Rendering for the artwork table.

use artic_lib::model::Artwork;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);
    render_table(frame, app, table_area);
    render_footer(frame, app, footer_area);

    if app.table.overlay_open() {
        render_overlay(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let busy = if app.table.is_busy() { " · loading…" } else { "" };
    let title = format!("Art Institute of Chicago — Artworks{}", busy);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        area,
    );
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        "", "ID", "Title", "Origin", "Artist", "Inscriptions", "Start", "End",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .table
        .rows()
        .iter()
        .map(|artwork| artwork_row(app, artwork))
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(8),
        Constraint::Percentage(26),
        Constraint::Percentage(14),
        Constraint::Percentage(24),
        Constraint::Percentage(18),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = if app.table.rows().is_empty() {
        None
    } else {
        Some(app.cursor)
    };
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}

fn artwork_row(app: &App, artwork: &Artwork) -> Row<'static> {
    let marker = if app.table.selection().contains(artwork.id) {
        "●"
    } else {
        " "
    };

    Row::new(vec![
        Cell::from(marker),
        Cell::from(artwork.id.to_string()),
        Cell::from(artwork.title.clone()),
        Cell::from(artwork.place_of_origin.clone().unwrap_or_default()),
        Cell::from(artwork.artist_display.clone().unwrap_or_default()),
        Cell::from(artwork.inscriptions.clone().unwrap_or_default()),
        Cell::from(artwork.date_start.map(|y| y.to_string()).unwrap_or_default()),
        Cell::from(artwork.date_end.map(|y| y.to_string()).unwrap_or_default()),
    ])
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let pagination = app.table.pagination();
    let mut summary = format!(
        "page {}/{} · {} per page · {} selected · {} total",
        pagination.current_page(),
        pagination.page_count().max(1),
        pagination.page_size(),
        app.table.selection().len(),
        pagination.total_records(),
    );
    if !app.status.is_empty() {
        summary = format!("{} — {}", summary, app.status);
    }

    let hints = "←/→ page · ↑/↓ row · space select · s select-N · p page size · r reload · q quit";
    let lines = vec![
        Line::from(summary),
        Line::from(hints).style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect(44, 5, frame.area());

    let lines = vec![
        Line::from(format!("First N rows: {}_", app.overlay_input)),
        Line::from(""),
        Line::from("Enter = submit · Esc = close").style(Style::default().fg(Color::DarkGray)),
    ];
    let block = Block::default().borders(Borders::ALL).title("Select rows");

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
