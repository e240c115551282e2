use std::io;
use thiserror::Error;

use crate::domain::ResourceHandle;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(ResourceHandle),
    #[error("I/O failure on {handle}: {source}")]
    Io {
        handle: ResourceHandle,
        #[source]
        source: io::Error,
    },
    #[error("No file location remembered")]
    NoHandleRemembered,
    #[error("A picker request is already pending")]
    PickerBusy,
    #[error("Settings store error: {0}")]
    Settings(String),
}

impl StoreError {
    /// Maps an I/O error on `handle`, treating a missing file as a vanished resource.
    pub fn from_io(handle: &ResourceHandle, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::ResourceNotFound(handle.clone())
        } else {
            StoreError::Io { handle: handle.clone(), source }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
