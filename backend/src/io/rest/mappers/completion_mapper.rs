use crate::domain::commands::completion::CompletedTask;
use crate::domain::models::Completion as DomainCompletion;
use crate::domain::REWARD_DISPLAY_DURATION;
use shared::{CompleteTaskResponse, Completion as SharedCompletion, CompletionListResponse};

use super::format_timestamp;

/// Mapper between shared completion DTOs and domain completions.
pub struct CompletionMapper;

impl CompletionMapper {
    pub fn to_dto(domain: DomainCompletion) -> SharedCompletion {
        SharedCompletion {
            id: domain.id,
            child_id: domain.child_id,
            task_id: domain.task_id,
            completed_at: format_timestamp(&domain.completed_at),
            notes: domain.notes,
        }
    }

    pub fn to_completion_list_dto(completions: Vec<DomainCompletion>) -> CompletionListResponse {
        CompletionListResponse {
            completions: completions.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_complete_task_response(completed: CompletedTask) -> CompleteTaskResponse {
        CompleteTaskResponse {
            completion: Self::to_dto(completed.completion),
            reward_message: completed.reward_message,
            reward_display_ms: REWARD_DISPLAY_DURATION.as_millis() as u64,
            completion_count: completed.completion_count,
        }
    }
}
