//! Use-case orchestration between handlers and repositories.
//!
//! Services are borrowed views over [`crate::state::AppState`], built per
//! request. Every mutation writes through to the store immediately; there is
//! no explicit transaction, so concurrent writers to one row follow
//! last-writer-wins.

pub mod categories;
pub mod templates;

pub use categories::CategoryService;
pub use templates::TemplateService;
