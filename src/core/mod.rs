//! Core request plumbing: sources, credentials, dispatch and HTTP.

pub mod credentials;
pub mod dispatch;
pub mod doctor;
pub mod http;
pub mod logging;
pub mod request;
pub mod source;

pub use credentials::Credentials;
pub use dispatch::{Adapter, Fetcher, dispatch};
pub use doctor::{CredentialReport, CredentialStatus};
pub use request::RequestSpec;
pub use source::Source;
