//! The storage-backed record store.
//!
//! Remembers one document handle in the settings store, drives the picker
//! workflow, and reads or overwrites the record in the remembered document.

use std::path::PathBuf;

use crate::domain::{
    AccessFlags, DocumentProvider, PickerAction, PickerOutcome, PickerRequest, Profile,
    ProfileCodec, ReadOutcome, ResourceHandle, SettingsStore, StoreError, StoreResult,
};

/// Settings key holding the remembered handle.
pub const PREF_URI: &str = "pref_uri";

/// Which operation a picker request was launched for.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    /// Read the picked document once the picker returns.
    Locate,
    /// Overwrite the picked document with `record` once the picker returns.
    Create { record: Profile },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickerState {
    Idle,
    AwaitingResult(PendingRequest),
}

/// What happened when the picker returned.
#[derive(Debug)]
pub enum Completion {
    /// Cancelled, no handle, or nothing was pending.
    Ignored,
    Written { handle: ResourceHandle, text: String },
    Read { handle: ResourceHandle, outcome: ReadOutcome },
    Failed { handle: ResourceHandle, error: StoreError },
}

/// Result of the exists-check run on every screen resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub handle: Option<ResourceHandle>,
    pub available: bool,
}

#[derive(Debug)]
pub struct RecordStore<S, P> {
    settings: S,
    provider: P,
    initial_location: PathBuf,
    state: PickerState,
}

impl<S: SettingsStore, P: DocumentProvider> RecordStore<S, P> {
    pub fn new(settings: S, provider: P, initial_location: PathBuf) -> Self {
        Self {
            settings,
            provider,
            initial_location,
            state: PickerState::Idle,
        }
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn remembered_handle(&self) -> Option<ResourceHandle> {
        self.settings.get(PREF_URI).map(ResourceHandle::new)
    }

    /// Starts a request to pick an existing document.
    pub fn locate(&mut self) -> StoreResult<PickerRequest> {
        self.begin(PendingRequest::Locate, PickerAction::OpenExisting)
    }

    /// Starts a request to create a document named `name`; `record` is
    /// written to it when the picker returns.
    pub fn create(&mut self, name: &str, record: Profile) -> StoreResult<PickerRequest> {
        self.begin(
            PendingRequest::Create { record },
            PickerAction::CreateNew { suggested_name: name.to_string() },
        )
    }

    fn begin(&mut self, pending: PendingRequest, action: PickerAction) -> StoreResult<PickerRequest> {
        if matches!(self.state, PickerState::AwaitingResult(_)) {
            return Err(StoreError::PickerBusy);
        }
        self.state = PickerState::AwaitingResult(pending);
        Ok(PickerRequest::new(action, self.initial_location.clone()))
    }

    /// Resolves the pending request. Always returns the store to `Idle`.
    pub fn on_picker_completed(&mut self, outcome: PickerOutcome, handle: Option<ResourceHandle>) -> Completion {
        let pending = match std::mem::replace(&mut self.state, PickerState::Idle) {
            PickerState::AwaitingResult(pending) => pending,
            PickerState::Idle => {
                tracing::warn!("picker completed with no pending request");
                return Completion::Ignored;
            }
        };
        let handle = match (outcome, handle) {
            (PickerOutcome::Ok, Some(handle)) => handle,
            _ => {
                tracing::info!(?outcome, "picker returned without a document");
                return Completion::Ignored;
            }
        };

        tracing::info!(handle = %handle, "document picked");
        if let Err(error) = self.settings.put(PREF_URI, handle.as_str()) {
            return Completion::Failed { handle, error };
        }
        self.provider.take_persistable_permission(&handle, AccessFlags::READ_WRITE);

        match pending {
            PendingRequest::Locate => match self.read_record(&handle) {
                Ok(outcome) => Completion::Read { handle, outcome },
                Err(error) => Completion::Failed { handle, error },
            },
            PendingRequest::Create { record } => match self.write_record(&handle, &record) {
                Ok(text) => Completion::Written { handle, text },
                Err(error) => Completion::Failed { handle, error },
            },
        }
    }

    /// Opens the remembered handle for reading and immediately closes it.
    pub fn check_availability(&mut self) -> Availability {
        let Some(handle) = self.remembered_handle() else {
            return Availability { handle: None, available: false };
        };
        let available = match self.provider.open_read(&handle) {
            Ok(reader) => {
                drop(reader);
                true
            }
            Err(e) => {
                tracing::info!(handle = %handle, error = %e, "remembered document unavailable");
                false
            }
        };
        Availability { handle: Some(handle), available }
    }

    pub fn read_record(&mut self, handle: &ResourceHandle) -> StoreResult<ReadOutcome> {
        let reader = self.provider.open_read(handle)?;
        let text = ProfileCodec::read_text(handle, reader)?;
        let profile = ProfileCodec::decode(&text);
        if profile.is_none() {
            tracing::debug!(handle = %handle, "document content is not a profile");
        }
        Ok(ReadOutcome { text, profile })
    }

    pub fn read_remembered(&mut self) -> StoreResult<(ResourceHandle, ReadOutcome)> {
        let handle = self.remembered_handle().ok_or(StoreError::NoHandleRemembered)?;
        let outcome = self.read_record(&handle)?;
        Ok((handle, outcome))
    }

    /// Replaces the document content with `record`, returning the written text.
    pub fn write_record(&mut self, handle: &ResourceHandle, record: &Profile) -> StoreResult<String> {
        let text = ProfileCodec::encode(record);
        let writer = self.provider.open_write(handle)?;
        ProfileCodec::write_text(handle, writer, &text)?;
        tracing::info!(handle = %handle, bytes = text.len(), "profile written");
        Ok(text)
    }
}
