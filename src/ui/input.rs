use crate::ui::app::{App, PopupKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.show_popup() {
        match key.code {
            KeyCode::Esc => app.close_popup(),
            KeyCode::Char('h') | KeyCode::Char('H') => {
                app.toggle_popup(PopupKind::History);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            app.increment()
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => app.decrement(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('0') => app.reset(),
        KeyCode::Char('h') | KeyCode::Char('H') => {
            app.toggle_popup(PopupKind::History);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
