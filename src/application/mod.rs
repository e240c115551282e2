//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the record store drives the picker workflow, the picker dialog stands in
//! for the platform document picker, and the app state holds what the
//! screen shows.

pub mod picker;
pub mod state;
pub mod store;

pub use picker::*;
pub use state::*;
pub use store::*;
