//! ECM backend client.
//!
//! Tools depend only on the [`EcmBackend`] trait. [`EcmApiClient`] is the
//! production implementation over the ECM REST API.

mod client;
mod contract;
mod error;
pub mod models;
mod retry;

#[cfg(test)]
pub(crate) mod testing;

pub use client::EcmApiClient;
pub use contract::EcmBackend;
pub use error::{BackendError, BackendResult};
pub use models::{Metadata, SearchRequest};
pub use retry::RetryPolicy;
