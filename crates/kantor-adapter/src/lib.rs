/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public kantor adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod quote;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Area,
    AuthManager,
    CredentialStore,
    FileCredentialStore,
    MemoryCredentialStore,
    Profile,
    Redirect,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    KantorClient,
    KantorError,
    RequestOptions,
    Result,
};

pub use quote::{ExchangeQuote, estimate_pln, parse_amount, validate_deposit};

// Re-export all types
pub use types::*;
