/*
[INPUT]:  Account credentials and the credential store
[OUTPUT]: Persisted session token, session checks and routing decisions
[POS]:    Auth layer - handles kantor session lifecycle
[UPDATE]: When auth flow or token storage changes
*/

pub mod guard;
pub mod manager;
pub mod store;
pub mod token;

pub use guard::{Area, Redirect, redirect_for};
pub use manager::{AuthManager, Profile};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY};
pub use token::extract_session_token;
