pub mod ports;
pub mod project_use_cases;
pub mod query_engine;
pub mod service;
