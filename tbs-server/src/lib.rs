//! # tbs-server
//!
//! The theatre booking registry: initialization, artist and act management,
//! scheduling, ticket issuance and sales reporting over an in-memory
//! [`Registry`].
//!
//! Every fallible call returns `Result<_, ServerError>`; the error's
//! `Display` begins with `ERROR`.

pub mod config;
pub mod error;
pub mod initialise;
pub mod logging;
pub mod parse;
pub mod registry;
pub mod report;

pub use config::{PricingConfig, RegistryConfig};
pub use error::ServerError;
pub use logging::init_tracing;
pub use registry::Registry;
pub use report::{PerformanceSnapshot, RegistrySnapshot, SalesReportLine, TheatreSnapshot};
