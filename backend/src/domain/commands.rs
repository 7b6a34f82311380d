//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the DTOs defined in the
//! `shared` crate to these internal types.

pub mod child {
    /// Input for registering a child. Fields are unvalidated.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
        pub age: i64,
        pub avatar_color: Option<String>,
    }
}

pub mod task {
    use shared::{DevelopmentArea, NewLearningTask};

    /// Input for adding one task definition to the catalog. Fields are unvalidated.
    #[derive(Debug, Clone)]
    pub struct NewTaskCommand {
        pub title: String,
        pub description: String,
        pub min_age: i64,
        pub max_age: i64,
        pub time_estimate: i64,
        pub development_area: DevelopmentArea,
        pub reward_message: String,
        pub icon: Option<String>,
    }

    impl From<NewLearningTask> for NewTaskCommand {
        fn from(dto: NewLearningTask) -> Self {
            Self {
                title: dto.title,
                description: dto.description,
                min_age: dto.min_age,
                max_age: dto.max_age,
                time_estimate: dto.time_estimate,
                development_area: dto.development_area,
                reward_message: dto.reward_message,
                icon: dto.icon,
            }
        }
    }
}

pub mod completion {
    use crate::domain::models::Completion;

    /// Input for completing a task on behalf of a child.
    #[derive(Debug, Clone)]
    pub struct CompleteTaskCommand {
        pub child_id: String,
        pub task_id: String,
        pub notes: Option<String>,
    }

    /// Result of a confirmed completion.
    #[derive(Debug, Clone)]
    pub struct CompletedTask {
        pub completion: Completion,
        pub reward_message: String,
        /// Completions of this task by this child, including this one
        pub completion_count: usize,
    }
}
