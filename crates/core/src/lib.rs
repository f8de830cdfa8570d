//! Building blocks for the rentprobe smoke tester: the HTTP client wrapper,
//! result aggregation, the shared run context, env-file configuration and
//! recovery of mock SMS verification codes.

pub mod client;
pub mod config;
pub mod context;
pub mod report;
pub mod sms;

pub use crate::client::{ApiClient, ApiResponse, BASE_URL, ProbeError};
pub use crate::context::RunContext;
pub use crate::report::TestReport;
