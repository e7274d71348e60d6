//! Entity definitions for the tables the dashboard service reads.
//! These tables are owned by the external store; the service never
//! writes them.

pub mod collections;
pub mod roles;
pub mod users;
