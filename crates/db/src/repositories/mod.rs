//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod template_repo;

pub use category_repo::CategoryRepo;
pub use template_repo::TemplateRepo;
