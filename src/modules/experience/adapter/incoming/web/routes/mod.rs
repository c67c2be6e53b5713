mod get_experiences;
mod get_single_experience;

pub use get_experiences::*;
pub use get_single_experience::*;
