//! Domain types shared across the Rekolo services.
//!
//! This crate contains only pure types and functions with no framework
//! dependencies. Import in `usecase/` and `domain/` layers; never in
//! `infra/` or `handlers/`.

pub mod pagination;
pub mod role;
pub mod search;
pub mod user;
