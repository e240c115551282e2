//! Application state for the single record-store screen.
//!
//! Holds what the screen displays and routes button presses and picker
//! results into the [`RecordStore`].

use crate::application::picker::TerminalPicker;
use crate::application::store::{Completion, RecordStore};
use crate::domain::{
    DocumentProvider, PickerOutcome, PickerRequest, Profile, ResourceHandle, SettingsStore, StoreError,
};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main screen - buttons are active
    Normal,
    /// A picker dialog owns the keyboard until it completes
    Picker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Save,
    Find,
    Read,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Save, Button::Find, Button::Read];

    pub fn label(self) -> &'static str {
        match self {
            Button::Save => "Save",
            Button::Find => "Find",
            Button::Read => "Read",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use recstore::application::{App, AppMode};
/// use recstore::infrastructure::{FileSettingsStore, FsDocumentProvider};
/// use recstore::application::RecordStore;
///
/// let dir = std::env::temp_dir().join("recstore-doc-example");
/// let settings = FileSettingsStore::open(dir.join("settings.json")).unwrap();
/// let store = RecordStore::new(settings, FsDocumentProvider, dir.clone());
/// let app = App::new(store, "profile.txt");
/// assert_eq!(app.mode, AppMode::Normal);
/// assert!(app.file_contents.is_empty());
/// ```
#[derive(Debug)]
pub struct App<S, P> {
    pub store: RecordStore<S, P>,
    pub mode: AppMode,
    pub focused: Button,
    /// Remembered handle as shown on screen
    pub location_text: String,
    /// "True" or "False" after the last exists-check
    pub available_text: String,
    /// Last written or read document text
    pub file_contents: String,
    /// Transient notice, cleared on the next key press
    pub status_message: Option<String>,
    pub picker: Option<TerminalPicker>,
    /// File name proposed by the Save button
    pub suggested_name: String,
    /// Record written by the Save button
    pub draft: Profile,
}

impl<S: SettingsStore, P: DocumentProvider> App<S, P> {
    pub fn new(store: RecordStore<S, P>, suggested_name: &str) -> Self {
        Self {
            store,
            mode: AppMode::Normal,
            focused: Button::Save,
            location_text: String::new(),
            available_text: String::new(),
            file_contents: String::new(),
            status_message: None,
            picker: None,
            suggested_name: suggested_name.to_string(),
            draft: Profile::sample(),
        }
    }

    /// Refreshes the location and availability lines.
    ///
    /// Runs at start-up and whenever a picker dialog closes.
    pub fn resume(&mut self) {
        let availability = self.store.check_availability();
        self.location_text = availability
            .handle
            .map(|h| h.to_string())
            .unwrap_or_default();
        self.available_text = if availability.available { "True" } else { "False" }.to_string();
    }

    pub fn press(&mut self, button: Button) {
        self.focused = button;
        match button {
            Button::Save => self.save(),
            Button::Find => self.find(),
            Button::Read => self.read(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = Button::ALL[(self.focused.index() + 1) % Button::ALL.len()];
    }

    pub fn focus_previous(&mut self) {
        let len = Button::ALL.len();
        self.focused = Button::ALL[(self.focused.index() + len - 1) % len];
    }

    fn save(&mut self) {
        let name = self.suggested_name.clone();
        let request = self.store.create(&name, self.draft.clone());
        self.launch(request);
    }

    fn find(&mut self) {
        let request = self.store.locate();
        self.launch(request);
    }

    fn launch(&mut self, request: Result<PickerRequest, StoreError>) {
        match request {
            Ok(request) => {
                self.picker = Some(TerminalPicker::new(request));
                self.mode = AppMode::Picker;
            }
            Err(e) => {
                tracing::warn!(error = %e, "picker request rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn read(&mut self) {
        match self.store.read_remembered() {
            Ok((_, outcome)) => {
                self.file_contents = outcome.text;
                self.status_message = Some("File Read".to_string());
            }
            Err(StoreError::NoHandleRemembered) => {
                tracing::info!("read requested with no remembered document");
                self.status_message = Some("Unknown file location!".to_string());
            }
            Err(e) => tracing::warn!(error = %e, "read failed"),
        }
    }

    /// Closes the picker dialog and feeds its result back into the store.
    pub fn finish_picker(&mut self, outcome: PickerOutcome, handle: Option<ResourceHandle>) {
        self.picker = None;
        self.mode = AppMode::Normal;

        match self.store.on_picker_completed(outcome, handle) {
            Completion::Written { text, .. } => self.file_contents = text,
            Completion::Read { outcome, .. } => {
                self.file_contents = outcome.text;
                self.status_message = Some("File Read".to_string());
            }
            Completion::Failed { handle, error } => {
                tracing::warn!(handle = %handle, error = %error, "picked document could not be used");
            }
            Completion::Ignored => {}
        }

        self.resume();
    }
}
