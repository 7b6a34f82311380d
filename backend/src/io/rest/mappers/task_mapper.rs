use crate::domain::commands::task::NewTaskCommand;
use crate::domain::models::LearningTask as DomainTask;
use shared::{ImportTasksRequest, ImportTasksResponse, LearningTask as SharedTask, TaskListResponse};

use super::format_timestamp;

/// Mapper between shared task DTOs and domain task models.
pub struct TaskMapper;

impl TaskMapper {
    pub fn to_dto(domain: DomainTask) -> SharedTask {
        SharedTask {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            min_age: domain.min_age,
            max_age: domain.max_age,
            time_estimate: domain.time_estimate,
            development_area: domain.development_area,
            reward_message: domain.reward_message,
            icon: domain.icon,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    pub fn to_commands(request: ImportTasksRequest) -> Vec<NewTaskCommand> {
        request.tasks.into_iter().map(NewTaskCommand::from).collect()
    }

    pub fn to_task_list_dto(tasks: Vec<DomainTask>) -> TaskListResponse {
        TaskListResponse {
            tasks: tasks.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_import_response(tasks: Vec<DomainTask>) -> ImportTasksResponse {
        let success_message = format!("Imported {} tasks", tasks.len());
        ImportTasksResponse {
            tasks: tasks.into_iter().map(Self::to_dto).collect(),
            success_message,
        }
    }
}
