//! recstore - Removable Storage Record Store
//!
//! Remembers a user-picked document across restarts and reads or overwrites
//! a small JSON profile record in it, from a terminal screen.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod testing;

pub use domain::*;
pub use application::*;

/// The app wired to the filesystem settings store and document provider.
pub type TerminalApp = App<infrastructure::FileSettingsStore, infrastructure::FsDocumentProvider>;
