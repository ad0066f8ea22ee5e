use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Column;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{chart_value, truncate};

const BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 0;
const GROUP_GAP: u16 = 2;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Title
            Constraint::Percentage(45), // Chart
            Constraint::Length(1),      // Legend
            Constraint::Min(5),         // Table
        ])
        .split(area);

    render_title(f, chunks[0]);
    render_chart(f, chunks[1], app);
    render_legend(f, chunks[2]);
    render_table(f, chunks[3], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" BPHL ", theme::title_style()),
        Span::styled(
            " CLARA BPHL XI – Dashboard Pengendalian Anggaran",
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

fn section_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()))
}

/// How many bar groups fit across `width` columns of chart.
pub(crate) fn group_capacity(width: u16) -> usize {
    let group_span = 3 * BAR_WIDTH + 2 * BAR_GAP + GROUP_GAP;
    usize::from((width.saturating_sub(2) / group_span).max(1))
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = section_block(format!(" Grafik Realisasi Bulanan – {} ", app.month));
    let rows = app.store.rows();

    if rows.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Belum ada data", theme::dim_style())),
            Line::from(Span::styled(
                "Import a spreadsheet with :i or add a row on the Input tab",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Keep the visible groups in step with the table scroll
    let capacity = group_capacity(area.width);
    let start = app.table_scroll.min(rows.len().saturating_sub(capacity));
    let label_width = usize::from(3 * BAR_WIDTH + 2 * BAR_GAP);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP)
        .value_style(Style::default().fg(theme::HEADER_BG));

    for row in rows.iter().skip(start).take(capacity) {
        let [allocation, disbursement, spend] = row.chart_values();
        let bars = [
            series_bar(chart_value(allocation), theme::RKA_BAR),
            series_bar(chart_value(disbursement), theme::RPD_BAR),
            series_bar(chart_value(spend), theme::SPJ_BAR),
        ];
        let label = truncate(&row.description(), label_width);
        chart = chart.data(BarGroup::default().label(Line::from(label)).bars(&bars));
    }

    f.render_widget(chart, area);
}

fn series_bar(value: u64, color: ratatui::style::Color) -> Bar<'static> {
    Bar::default()
        .value(value)
        .text_value(String::new())
        .style(Style::default().fg(color))
}

fn render_legend(f: &mut Frame, area: Rect) {
    let legend = Paragraph::new(Line::from(vec![
        Span::styled("■ RKA  ", Style::default().fg(theme::RKA_BAR)),
        Span::styled("■ RPD  ", Style::default().fg(theme::RPD_BAR)),
        Span::styled("■ SPJ", Style::default().fg(theme::SPJ_BAR)),
    ]))
    .centered();
    f.render_widget(legend, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let rows = app.store.rows();
    let header_cells = Column::all()
        .iter()
        .map(|c| Cell::from(c.header()).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(app.table_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, row)| {
            let cells = Column::all().iter().map(|col| {
                let text = row.column(*col).unwrap_or_default();
                match col {
                    Column::Status => {
                        let style = theme::status_badge_style(&text);
                        Cell::from(Span::styled(format!(" {text} "), style))
                    }
                    Column::Description => Cell::from(truncate(&text, 40)),
                    _ => Cell::from(text),
                }
            });

            let style = if i == app.table_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(section_block(format!(" Data Anggaran ({}) ", rows.len())));

    f.render_widget(table, area);
}
