mod experience_catalog_in_memory;
pub mod seed;

pub use experience_catalog_in_memory::InMemoryExperienceCatalog;
