pub mod seed;
mod skill_catalog_in_memory;

pub use skill_catalog_in_memory::InMemorySkillCatalog;
