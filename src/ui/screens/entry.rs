use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::format_amount;

const LABEL_WIDTH: usize = 12;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_form(f, chunks[0], app);
    render_preview(f, chunks[1], app);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;

    let items: Vec<ListItem> = FormField::all()
        .iter()
        .map(|field| {
            let focused = *field == app.form.focus;
            let value = app.form.value(*field);
            let value_style = if focused && editing {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let shown = if value.is_empty() && !(focused && editing) {
                Span::styled(field.label(), theme::dim_style())
            } else {
                Span::styled(value.to_string(), value_style)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", field.label(), width = LABEL_WIDTH),
                    if focused {
                        theme::title_style()
                    } else {
                        theme::dim_style()
                    },
                ),
                shown,
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing {
                theme::ACCENT
            } else {
                theme::OVERLAY
            }))
            .title(Span::styled(" Tambah Data ", theme::title_style())),
    );
    f.render_widget(list, area);

    if editing {
        let position = FormField::all()
            .iter()
            .position(|field| *field == app.form.focus)
            .unwrap_or(0) as u16;
        let typed = app.form.value(app.form.focus).chars().count() as u16;
        let x = area.x + 2 + LABEL_WIDTH as u16 + typed;
        let y = area.y + 1 + position;
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            f.set_cursor_position((x, y));
        }
    }
}

fn render_preview(f: &mut Frame, area: Rect, app: &App) {
    let derived = app.form.preview();
    let line = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {label:<16}"), theme::dim_style()),
            Span::styled(value, theme::normal_style()),
        ])
    };

    let status = derived.status.label();
    let hint = if app.form.is_blank() {
        " Press Enter to start typing"
    } else {
        " Empty or invalid amounts count as 0"
    };
    let text = vec![
        Line::from(""),
        line("Total Realisasi", format_amount(derived.total_realization)),
        line("Selisih", format_amount(derived.variance)),
        line("Sisa Pagu", format_amount(derived.remaining_ceiling)),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "Status"), theme::dim_style()),
            Span::styled(format!(" {status} "), theme::status_badge_style(status)),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, theme::dim_style())),
    ];

    let preview = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Pratinjau ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(preview, area);
}
