//! Domains module containing business logic organized by bounded contexts.
//!
//! The gateway exposes a single context: the ECM tools.

pub mod tools;
