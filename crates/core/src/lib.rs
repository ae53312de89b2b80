//! Domain types, errors, and validation rules shared by every outreach crate.
//!
//! Nothing in here performs I/O. Repositories, the AI adapter, and the HTTP
//! layer all call into these rules so limits live in exactly one place.

pub mod category;
pub mod error;
pub mod generation;
pub mod template;
pub mod types;
pub mod validation;
