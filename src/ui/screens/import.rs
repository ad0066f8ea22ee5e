use std::path::Path;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::import::is_spreadsheet;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[1]);

    let location = Paragraph::new(Line::from(vec![
        Span::styled(" Folder: ", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(
            app.file_browser_path.display().to_string(),
            Style::default().fg(theme::ACCENT),
        ),
    ]))
    .block(panel(" Pilih Berkas Excel (.xlsx / .xls) ").title_style(theme::title_style()));
    f.render_widget(location, rows[0]);

    render_entries(f, body[0], app);
    render_selection(f, body[1], app);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(title)
}

fn entry_label(app: &App, path: &Path) -> String {
    if Some(path) == app.file_browser_path.parent() {
        return "📁 ..".to_string();
    }
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
    if path.is_dir() {
        format!("📁 {name}/")
    } else {
        format!("📄 {name}")
    }
}

fn render_entries(f: &mut Frame, area: Rect, app: &App) {
    let page = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .file_browser_entries
        .iter()
        .enumerate()
        .skip(app.file_browser_scroll)
        .take(page)
        .map(|(i, path)| {
            let style = if i == app.file_browser_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Span::styled(entry_label(app, path), style))
        })
        .collect();

    let hidden = if app.file_browser_show_hidden {
        " . hide dotfiles "
    } else {
        " . show dotfiles "
    };
    let list = List::new(items).block(panel(hidden).title_style(theme::dim_style()));
    f.render_widget(list, area);
}

fn render_selection(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.file_browser_entries.get(app.file_browser_index);
    let action = match selected {
        Some(path) if is_spreadsheet(path) => "Enter: load this sheet",
        Some(_) => "Enter: open folder",
        None => "No spreadsheets here",
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {action}"), theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled(
            " Only the first sheet is read.",
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            format!(" Replaces the {} current rows.", app.store.len()),
            theme::dim_style(),
        )),
    ];
    f.render_widget(Paragraph::new(text).block(panel(" Info ")), area);
}
