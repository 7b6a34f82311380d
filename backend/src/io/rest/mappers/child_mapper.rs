use crate::domain::commands::child::CreateChildCommand;
use crate::domain::models::Child as DomainChild;
use shared::{Child as SharedChild, ChildListResponse, ChildResponse, CreateChildRequest};

use super::format_timestamp;

/// Mapper between shared Child DTOs and domain Child models.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            name: domain.name,
            age: domain.age,
            avatar_color: domain.avatar_color,
            created_at: format_timestamp(&domain.created_at),
        }
    }

    pub fn to_command(request: CreateChildRequest) -> CreateChildCommand {
        CreateChildCommand {
            name: request.name,
            age: request.age,
            avatar_color: request.avatar_color,
        }
    }

    pub fn to_child_response(domain: DomainChild) -> ChildResponse {
        let success_message = format!("{} is ready to start learning!", domain.name);
        ChildResponse {
            child: Self::to_dto(domain),
            success_message,
        }
    }

    pub fn to_child_list_dto(domain_children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: domain_children.into_iter().map(Self::to_dto).collect(),
        }
    }
}
