use crate::domain::progress_engine::AreaProgress as DomainProgress;
use crate::domain::task_board::TaskCardView;
use crate::domain::TaskBoard;
use shared::{AreaProgress, ProgressResponse, TaskBoardResponse, TaskCard};

use super::{ChildMapper, TaskMapper};

/// Maps task boards and progress summaries to their DTOs.
pub struct BoardMapper;

impl BoardMapper {
    pub fn to_progress_dto(progress: Vec<DomainProgress>) -> Vec<AreaProgress> {
        progress
            .into_iter()
            .map(|p| AreaProgress {
                area: p.area,
                label: p.area.label().to_string(),
                total: p.total,
                completed: p.completed,
            })
            .collect()
    }

    pub fn to_progress_response(child_id: String, progress: Vec<DomainProgress>) -> ProgressResponse {
        ProgressResponse {
            child_id,
            areas: Self::to_progress_dto(progress),
        }
    }

    pub fn to_card_dto(card: TaskCardView<'_>) -> TaskCard {
        TaskCard {
            task: TaskMapper::to_dto(card.task.clone()),
            icon: card.icon.name().to_string(),
            completion_count: card.completion_count,
            is_completed: card.is_completed,
        }
    }

    pub fn to_board_response(board: &TaskBoard) -> TaskBoardResponse {
        TaskBoardResponse {
            child: ChildMapper::to_dto(board.child().clone()),
            selected_area: board.selected_area().as_str().to_string(),
            selected_area_label: board.selected_area().label().to_string(),
            tasks: board.cards().into_iter().map(Self::to_card_dto).collect(),
            progress: Self::to_progress_dto(board.progress()),
        }
    }
}
