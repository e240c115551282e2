use crate::application::{App, AppMode, Button, PickerSubmit};
use crate::domain::{DocumentProvider, PickerOutcome, SettingsStore};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event<S: SettingsStore, P: DocumentProvider>(
        app: &mut App<S, P>,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Picker => Self::handle_picker_mode(app, key),
        }
    }

    fn handle_normal_mode<S: SettingsStore, P: DocumentProvider>(
        app: &mut App<S, P>,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        app.status_message = None;

        match key {
            KeyCode::Char('s') => app.press(Button::Save),
            KeyCode::Char('f') => app.press(Button::Find),
            KeyCode::Char('r') => app.press(Button::Read),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.focus_next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.focus_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => app.press(app.focused),
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    tracing::trace!(?key, "unbound control key");
                }
            }
        }
    }

    fn handle_picker_mode<S: SettingsStore, P: DocumentProvider>(app: &mut App<S, P>, key: KeyCode) {
        let Some(picker) = app.picker.as_mut() else {
            app.mode = AppMode::Normal;
            return;
        };

        match key {
            KeyCode::Esc => app.finish_picker(PickerOutcome::Cancelled, None),
            KeyCode::Enter => {
                if let PickerSubmit::Picked(handle) = picker.submit() {
                    app.finish_picker(PickerOutcome::Ok, Some(handle));
                }
            }
            KeyCode::Down => picker.select_next(),
            KeyCode::Up => picker.select_previous(),
            KeyCode::Backspace => picker.pop_char(),
            KeyCode::Char(c) => picker.push_char(c),
            _ => {}
        }
    }
}
