pub mod categories;
pub mod templates;
