//! In-memory stand-ins for the backend auth client, the billing SDK and the
//! backend profile table. Used by the demo binary and integration tests.

mod auth;
mod billing;
mod profile;

pub use auth::InMemoryAuthSession;
pub use billing::InMemoryBilling;
pub use profile::{InMemoryProfileSync, ProfilePush};
