mod project_catalog_in_memory;
pub mod seed;

pub use project_catalog_in_memory::InMemoryProjectCatalog;
