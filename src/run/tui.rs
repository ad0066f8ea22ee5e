use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use crate::models::Month;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// Start-up options for the interactive dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TuiOptions {
    pub(crate) month: Month,
    /// Spreadsheet to import before the first frame.
    pub(crate) file: Option<PathBuf>,
}

fn start_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")))
}

pub(crate) fn as_tui(options: TuiOptions) -> Result<()> {
    crate::logging::init_for_tui()?;

    let mut app = App::new(start_dir());
    app.set_month(options.month);
    if let Some(path) = &options.file {
        app.import_file(path)
            .with_context(|| format!("Could not import {}", path.display()))?;
    }

    install_restore_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "dashboard exited with an error");
        eprintln!("Error: {e:?}");
    }

    result
}

/// Leave raw mode and the alternate screen before the panic message is
/// printed. Release builds abort on panic, so the normal teardown never runs.
fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Table body: main area minus bars, title, chart and table chrome
            let content_height = f.area().height.saturating_sub(4) as usize;
            app.visible_rows = (content_height * 55 / 100).saturating_sub(4).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Editing => handle_editing_input(key, app),
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char('1') => switch_screen(app, Screen::Dashboard),
        KeyCode::Char('2') => switch_screen(app, Screen::Entry),
        KeyCode::Char('3') => switch_screen(app, Screen::Import),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('H') => commands::handle_command("prev-month", app)?,
        KeyCode::Char('L') => commands::handle_command("next-month", app)?,
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('.') if app.screen == Screen::Import => {
            app.file_browser_show_hidden = !app.file_browser_show_hidden;
            app.refresh_file_browser();
        }
        KeyCode::Backspace if app.screen == Screen::Import => {
            if let Some(parent) = app.file_browser_path.parent().map(|p| p.to_path_buf()) {
                app.file_browser_path = parent;
                app.refresh_file_browser();
            }
        }
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => handle_escape(app),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_entry();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = app.form.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = app.form.focus.prev();
        }
        KeyCode::Enter => {
            if app.form.focus.is_last() {
                app.submit_entry();
            } else {
                app.form.focus = app.form.focus.next();
            }
        }
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.push_char(c);
        }
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    match screen {
        Screen::Entry => app.input_mode = InputMode::Editing,
        Screen::Import => app.refresh_file_browser(),
        Screen::Dashboard => {}
    }
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Dashboard => {
            let len = app.store.len();
            scroll_down(&mut app.table_index, &mut app.table_scroll, len, app.visible_rows);
        }
        Screen::Import => {
            let len = app.file_browser_entries.len();
            scroll_down(
                &mut app.file_browser_index,
                &mut app.file_browser_scroll,
                len,
                app.visible_rows,
            );
        }
        Screen::Entry => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Dashboard => scroll_up(&mut app.table_index, &mut app.table_scroll),
        Screen::Import => scroll_up(&mut app.file_browser_index, &mut app.file_browser_scroll),
        Screen::Entry => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Dashboard => scroll_to_top(&mut app.table_index, &mut app.table_scroll),
        Screen::Import => scroll_to_top(&mut app.file_browser_index, &mut app.file_browser_scroll),
        Screen::Entry => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Dashboard => {
            let len = app.store.len();
            scroll_to_bottom(&mut app.table_index, &mut app.table_scroll, len, app.visible_rows);
        }
        Screen::Import => {
            let len = app.file_browser_entries.len();
            scroll_to_bottom(
                &mut app.file_browser_index,
                &mut app.file_browser_scroll,
                len,
                app.visible_rows,
            );
        }
        Screen::Entry => {}
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Entry => app.input_mode = InputMode::Editing,
        Screen::Import => {
            let Some(path) = app.file_browser_entries.get(app.file_browser_index).cloned() else {
                return;
            };
            if path.is_dir() {
                app.file_browser_path = path;
                app.refresh_file_browser();
            } else {
                match app.import_file(&path) {
                    Ok(_) => app.screen = Screen::Dashboard,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "import failed");
                        app.set_status(format!("Error loading file: {e:#}"));
                    }
                }
            }
        }
        Screen::Dashboard => {}
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Import => app.screen = Screen::Dashboard,
        _ => app.status_message.clear(),
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
