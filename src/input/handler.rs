use crate::app::AppState;
use crate::domain::{PlannerPane, Tab, UiMode};
use crate::input::TextBuffer;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits, even mid-edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingTaskField => handle_cell_editing_mode(app, key),
        UiMode::EditingFocus => {
            if key.code == KeyCode::Esc {
                app.finish_editing();
            } else {
                edit_text(&mut app.focus.text, key, true);
            }
            Ok(false)
        }
        UiMode::EditingBrainDump => {
            if key.code == KeyCode::Esc {
                app.finish_editing();
            } else {
                edit_text(&mut app.brain_dump, key, true);
            }
            Ok(false)
        }
        UiMode::EditingCalendarInput => handle_calendar_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        // Tab selector
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Planner);
            return Ok(false);
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Calendar);
            return Ok(false);
        }

        // Light/dark mode button
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            return Ok(false);
        }

        _ => {}
    }

    match app.active_tab {
        Tab::Planner => handle_planner_keys(app, key),
        Tab::Calendar => handle_calendar_keys(app, key),
    }
    Ok(false)
}

fn handle_planner_keys(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Tab {
        app.planner_pane = app.planner_pane.next();
        return;
    }

    match app.planner_pane {
        PlannerPane::Tasks => match key.code {
            KeyCode::Up => app.move_row_up(),
            KeyCode::Down => app.move_row_down(),
            KeyCode::Left => app.move_field_left(),
            KeyCode::Right => app.move_field_right(),
            KeyCode::Enter | KeyCode::Char('e') => {
                if app.selected_field.is_text() {
                    app.start_edit_cell();
                } else {
                    app.cycle_selected_option(true);
                }
            }
            KeyCode::Char(' ') => app.cycle_selected_option(true),
            KeyCode::Backspace => app.cycle_selected_option(false),
            _ => {}
        },
        PlannerPane::Focus => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_focus_checked(Local::now()),
            KeyCode::Enter | KeyCode::Char('e') => app.ui_mode = UiMode::EditingFocus,
            _ => {}
        },
        PlannerPane::BrainDump => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('e')) {
                app.ui_mode = UiMode::EditingBrainDump;
            }
        }
    }
}

fn handle_calendar_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_selected_days(-1),
        KeyCode::Right => app.move_selected_days(1),
        KeyCode::Up => app.move_selected_days(-7),
        KeyCode::Down => app.move_selected_days(7),
        KeyCode::Char('[') | KeyCode::PageUp => app.move_selected_months(-1),
        KeyCode::Char(']') | KeyCode::PageDown => app.move_selected_months(1),
        KeyCode::Char('g') | KeyCode::Home => app.select_today(),
        KeyCode::Enter | KeyCode::Char('a') => app.ui_mode = UiMode::EditingCalendarInput,
        _ => {}
    }
}

/// Handle keys while a task cell is being edited
fn handle_cell_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => app.finish_editing(),
        KeyCode::Backspace => app.cell_backspace(),
        KeyCode::Delete => app.cell_delete(),
        KeyCode::Left => app.cell_editor.move_left(),
        KeyCode::Right => app.cell_editor.move_right(),
        KeyCode::Home => app.cell_editor.move_home(),
        KeyCode::End => app.cell_editor.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.cell_insert(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the add-to-calendar input
fn handle_calendar_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.finish_editing(),
        // Add; the input stays focused for the next entry
        KeyCode::Enter => {
            app.add_calendar_entry();
        }
        _ => {
            edit_text(&mut app.calendar_input, key, false);
        }
    }
    Ok(false)
}

/// Apply a text-editing key to a buffer. Returns true if the content changed.
fn edit_text(buf: &mut TextBuffer, key: KeyEvent, multiline: bool) -> bool {
    match key.code {
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.move_home(),
        KeyCode::End => buf.move_end(),
        KeyCode::Backspace => return buf.backspace(),
        KeyCode::Delete => return buf.delete(),
        KeyCode::Enter if multiline => {
            buf.insert('\n');
            return true;
        }

        // Option+b / Option+f - macOS sends these for Option+Left/Right
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::ALT) => buf.word_left(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::ALT) => buf.word_right(),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buf.insert(c);
            return true;
        }
        _ => {}
    }
    false
}
