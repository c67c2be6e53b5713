use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSingleSkillUseCase, GetSkillsUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
}
