pub mod entities;
pub mod tenure;

pub use entities::{Experience, ExperienceError};
pub use tenure::{Tenure, TenureCalculator, TenureError};
