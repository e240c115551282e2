use std::fmt;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

const FILE_SCHEME: &str = "file://";

/// Opaque reference to a document managed by a storage provider.
///
/// Handles are persisted verbatim, so the string form is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds a `file://` handle. Paths that are not valid UTF-8 have no
    /// lossless string form and yield `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.to_str().map(|path| Self(format!("{}{}", FILE_SCHEME, path)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a `file://` handle to a local path. Other schemes belong to
    /// providers this host does not have.
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0
            .strip_prefix(FILE_SCHEME)
            .filter(|rest| !rest.is_empty())
            .map(PathBuf::from)
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The flat record written to the picked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub weight: i32,
    pub age: i32,
    pub sex: String,
}

impl Profile {
    pub fn sample() -> Self {
        Self {
            id: 1,
            first_name: "Todd".to_string(),
            last_name: "D".to_string(),
            weight: 150,
            age: 35,
            sex: "Male".to_string(),
        }
    }
}

/// Access rights requested when persisting a grant on a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessFlags {
    pub read: bool,
    pub write: bool,
}

impl AccessFlags {
    pub const READ_WRITE: AccessFlags = AccessFlags { read: true, write: true };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    OpenExisting,
    CreateNew { suggested_name: String },
}

/// Parameters handed to the picker service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub action: PickerAction,
    pub categories: Vec<String>,
    pub type_filter: String,
    pub mime_types: Vec<String>,
    pub initial_location: PathBuf,
}

impl PickerRequest {
    pub fn new(action: PickerAction, initial_location: PathBuf) -> Self {
        Self {
            action,
            categories: vec!["openable".to_string()],
            type_filter: "*/*".to_string(),
            mime_types: vec!["text/plain".to_string()],
            initial_location,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self.action, PickerAction::CreateNew { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Ok,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_round_trips_file_path() {
        let handle = ResourceHandle::from_path(Path::new("/media/usb/profile.txt")).unwrap();
        assert_eq!(handle.as_str(), "file:///media/usb/profile.txt");
        assert_eq!(handle.to_path(), Some(PathBuf::from("/media/usb/profile.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_has_no_handle() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/media/usb/pro\xfffile.txt"));
        assert!(ResourceHandle::from_path(path).is_none());
    }

    #[test]
    fn test_foreign_scheme_has_no_path() {
        let handle = ResourceHandle::new("content://com.android.externalstorage.documents/document/1");
        assert!(handle.to_path().is_none());
        assert!(ResourceHandle::new("file://").to_path().is_none());
    }

    #[test]
    fn test_sample_profile_uses_camel_case_fields() {
        let json = serde_json::to_string(&Profile::sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"firstName":"Todd","lastName":"D","weight":150,"age":35,"sex":"Male"}"#
        );
    }

    #[test]
    fn test_request_defaults_to_plain_text_filter() {
        let request = PickerRequest::new(PickerAction::OpenExisting, PathBuf::from("/media"));
        assert_eq!(request.type_filter, "*/*");
        assert_eq!(request.mime_types, vec!["text/plain".to_string()]);
        assert_eq!(request.categories, vec!["openable".to_string()]);
        assert!(!request.is_create());
    }
}
