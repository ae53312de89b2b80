//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` row struct, joined with the display fields
//!   callers always want alongside it
//! - `Deserialize` create and update DTOs (updates replace every writable field)

pub mod category;
pub mod status;
pub mod template;
