//! Terminal picker dialog.
//!
//! Plays the role of the platform document picker: it browses the local
//! filesystem starting from the request's initial location, lists only
//! entries matching the requested content types, and yields a handle for an
//! existing or newly created document.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::domain::{PickerAction, PickerRequest, ResourceHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Result of pressing Enter in the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerSubmit {
    /// The path named a directory; the listing moved into it.
    Navigated,
    Picked(ResourceHandle),
    /// The dialog stays open with `error` set.
    Rejected,
}

#[derive(Debug)]
pub struct TerminalPicker {
    pub request: PickerRequest,
    pub input: String,
    pub entries: Vec<PickerEntry>,
    pub selected: Option<usize>,
    pub error: Option<String>,
}

fn extensions_for(mime: &str) -> &'static [&'static str] {
    match mime {
        "text/plain" => &["txt", "text"],
        "application/json" => &["json"],
        _ => &[],
    }
}

impl TerminalPicker {
    pub fn new(request: PickerRequest) -> Self {
        let start = match &request.action {
            PickerAction::OpenExisting => request.initial_location.clone(),
            PickerAction::CreateNew { suggested_name } => request.initial_location.join(suggested_name),
        };
        let mut picker = Self {
            input: start.display().to_string(),
            request,
            entries: Vec::new(),
            selected: None,
            error: None,
        };
        picker.refresh();
        picker
    }

    pub fn title(&self) -> &'static str {
        match self.request.action {
            PickerAction::OpenExisting => "Open document",
            PickerAction::CreateNew { .. } => "Create document",
        }
    }

    /// Directory currently being listed: the input itself when it is a
    /// directory, otherwise its parent.
    pub fn listing_dir(&self) -> PathBuf {
        let path = PathBuf::from(&self.input);
        if path.is_dir() {
            path
        } else {
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.request.mime_types.is_empty() {
            return self.request.type_filter == "*/*";
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.request
            .mime_types
            .iter()
            .flat_map(|mime| extensions_for(mime).iter())
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    pub fn refresh(&mut self) {
        let dir = self.listing_dir();
        let mut entries: Vec<PickerEntry> = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let path = entry.path();
                    // The input line is a String; such entries could never be picked.
                    path.to_str()?;
                    let is_dir = path.is_dir();
                    if !is_dir && !self.accepts(&path) {
                        return None;
                    }
                    Some(PickerEntry {
                        name: entry.file_name().to_str()?.to_string(),
                        path,
                        is_dir,
                    })
                })
                .collect(),
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "picker listing failed");
                Vec::new()
            }
        };
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        self.entries = entries;
        self.selected = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.error = None;
        self.refresh();
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.entries.len());
        self.select(next);
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = match self.selected {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.select(previous);
    }

    // Keeps the listing in place while the input follows the highlight.
    fn select(&mut self, index: usize) {
        self.input = self.entries[index].path.display().to_string();
        self.selected = Some(index);
        self.error = None;
    }

    pub fn submit(&mut self) -> PickerSubmit {
        let path = PathBuf::from(self.input.trim());
        if path.is_dir() {
            self.input = path.display().to_string();
            self.error = None;
            self.refresh();
            return PickerSubmit::Navigated;
        }

        let picked = match &self.request.action {
            PickerAction::OpenExisting => {
                if path.is_file() {
                    Ok(path)
                } else {
                    Err(format!("No such file: {}", path.display()))
                }
            }
            PickerAction::CreateNew { .. } => Self::create(&path),
        };

        let message = match picked {
            Ok(path) => {
                let path = fs::canonicalize(&path).unwrap_or(path);
                match ResourceHandle::from_path(&path) {
                    Some(handle) => return PickerSubmit::Picked(handle),
                    None => format!("Path is not valid UTF-8: {}", path.display()),
                }
            }
            Err(message) => message,
        };
        self.error = Some(message);
        PickerSubmit::Rejected
    }

    fn create(path: &Path) -> Result<PathBuf, String> {
        if path.file_name().is_none() {
            return Err("Enter a file name".to_string());
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|_| path.to_path_buf())
            .map_err(|e| format!("Cannot create {}: {}", path.display(), e))
    }
}
