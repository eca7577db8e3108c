use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, DeferredTask};
use crate::models::{Command, FocusArea};

/// Applies one key press. Returns `false` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return false;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            app.request_redraw();
            return true;
        }
        KeyCode::F(2) => {
            app.strings.cycle_locale();
            app.request_redraw();
            return true;
        }
        _ => {}
    }

    match app.focus {
        FocusArea::Input => handle_input_key(app, key),
        FocusArea::List => handle_list_key(app, key),
    }
}

/// Ctrl, Alt and friends; Shift alone does not count.
fn has_command_modifier(key: &KeyEvent) -> bool {
    !key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn handle_input_key(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char(_)) && has_command_modifier(&key) {
        return true;
    }
    match key.code {
        KeyCode::Char(c) => {
            let mut text = app.controller.pending_input().to_string();
            text.push(c);
            app.controller.set_pending_input(text);
        }
        KeyCode::Backspace => {
            let mut text = app.controller.pending_input().to_string();
            text.pop();
            app.controller.set_pending_input(text);
        }
        KeyCode::Enter => {
            app.controller.execute(Command::AddVariety);
            app.clamp_cursor();
        }
        KeyCode::Esc => app.controller.set_pending_input(String::new()),
        _ => {}
    }
    true
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    if matches!(key.code, KeyCode::Char(_)) && has_command_modifier(&key) {
        return true;
    }
    let len = app.controller.varieties().len();
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Esc => app.controller.clear_selection(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.cursor = match app.cursor {
                Some(i) if i > 0 => Some(i - 1),
                None if len > 0 => Some(0),
                other => other,
            };
            app.request_redraw();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.cursor = match app.cursor {
                Some(i) if i + 1 < len => Some(i + 1),
                None if len > 0 => Some(0),
                other => other,
            };
            app.request_redraw();
        }
        KeyCode::Char(' ') => {
            if let Some(name) = app.cursor_variety().map(str::to_string) {
                app.controller.toggle_selection(&name);
            }
        }
        KeyCode::Delete | KeyCode::Char('x') => {
            if app.controller.can_execute(Command::Remove) {
                let index_before = app.cursor.unwrap_or(0);
                app.controller.execute(Command::Remove);
                app.clamp_cursor();
                app.defer(DeferredTask::RestoreListFocus { index_before });
            }
        }
        KeyCode::Char('X') => {
            app.controller.execute(Command::RemoveAll);
            app.clamp_cursor();
        }
        _ => {}
    }
    true
}
