//! Livestatus module.
//!
//! Talks to the monitoring engine over its unix socket and decodes the
//! positional JSON replies into typed records.

#[macro_use]
mod record;

mod client;
mod models;
mod query;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::*;
pub use models::*;
pub use query::*;
pub use record::*;
