//! Session restoration use cases.

mod restore;

pub use restore::RestoringSessionStore;
