use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesUseCase, GetSingleExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get_list: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
}
