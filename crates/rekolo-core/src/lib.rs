//! Shared service plumbing: time-budgeted fetches, paged reads, health
//! endpoints, identity extraction, tracing setup.

pub mod fetch;
pub mod health;
pub mod identity;
pub mod middleware;
pub mod paging;
pub mod serde;
pub mod tracing;
