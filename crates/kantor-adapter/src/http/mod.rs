/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod exchange;
pub mod history;
pub mod rates;
pub mod wallet;

pub use error::{KantorError, Result};

pub use client::{ClientConfig, KantorClient, RequestOptions};
