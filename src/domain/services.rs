use std::io::{BufRead, BufReader, Read, Write};

use crate::domain::{AccessFlags, Profile, ResourceHandle, StoreError, StoreResult};

/// Durable string key-value persistence.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Storage provider that resolves handles to byte streams.
///
/// Streams are closed when dropped, so every open is scoped to the caller.
pub trait DocumentProvider {
    fn open_read(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Read>>;

    /// Opens for writing, truncating any existing content.
    fn open_write(&mut self, handle: &ResourceHandle) -> StoreResult<Box<dyn Write>>;

    /// Keeps `handle` usable across process restarts.
    fn take_persistable_permission(&mut self, handle: &ResourceHandle, flags: AccessFlags);
}

/// Text decoded from a document together with a best-effort record decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutcome {
    pub text: String,
    pub profile: Option<Profile>,
}

pub struct ProfileCodec;

impl ProfileCodec {
    pub fn encode(profile: &Profile) -> String {
        // Plain string and integer fields cannot fail to serialize.
        serde_json::to_string(profile).unwrap_or_default()
    }

    pub fn decode(text: &str) -> Option<Profile> {
        serde_json::from_str(text).ok()
    }

    /// Reads all lines and concatenates them without line breaks.
    pub fn read_text(handle: &ResourceHandle, reader: impl Read) -> StoreResult<String> {
        let mut text = String::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|e| StoreError::from_io(handle, e))?;
            text.push_str(&line);
        }
        Ok(text)
    }

    pub fn write_text(handle: &ResourceHandle, mut writer: impl Write, text: &str) -> StoreResult<()> {
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| StoreError::from_io(handle, e))
    }
}
