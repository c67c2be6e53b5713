pub mod experience_use_cases;
pub mod experience_view;
pub mod ports;
pub mod service;
