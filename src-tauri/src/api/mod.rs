//! API Layer
//!
//! Transport to the punchcards REST server.

mod error;
mod traits;
mod http;

pub use error::{ApiError, ApiResult};
pub use traits::PunchcardsApi;
pub use http::HttpApi;

#[cfg(test)]
pub(crate) use http::tests::start_test_server;
