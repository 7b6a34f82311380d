//! Eligibility and progress rules.
//!
//! Every function here is pure: it derives its answer from the collections it
//! is given and keeps nothing between calls, so progress can never go stale.
//!
//! ## Caller obligation
//!
//! [`is_completed`] and [`completion_count`] look only at the task id. The
//! completion list passed in **must already be scoped to one child**, or
//! completions from one child show up on another child's tasks.
//! [`TaskBoard`](super::task_board::TaskBoard) does this scoping when it is
//! built; reuse it rather than calling these functions on an unscoped log.

use std::borrow::Borrow;

use shared::DevelopmentArea;

use super::models::{AreaFilter, Child, Completion, LearningTask};

/// Completed versus total tasks for one developmental area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaProgress {
    pub area: DevelopmentArea,
    pub total: usize,
    pub completed: usize,
}

/// Tasks whose age range contains the child's age, ordered by title.
///
/// The sort is stable, so tasks with the same title keep their catalog order.
pub fn eligible_tasks<'a>(all_tasks: &'a [LearningTask], child: &Child) -> Vec<&'a LearningTask> {
    let mut eligible: Vec<&LearningTask> = all_tasks
        .iter()
        .filter(|task| task.is_eligible_for(child.age))
        .collect();
    eligible.sort_by(|a, b| a.title.cmp(&b.title));
    eligible
}

/// Tasks in the selected area. `All` keeps everything in order; an unknown
/// area yields nothing.
pub fn filter_by_area<T>(tasks: &[T], area: &AreaFilter) -> Vec<T>
where
    T: Borrow<LearningTask> + Clone,
{
    tasks
        .iter()
        .filter(|task| area.matches(Borrow::<LearningTask>::borrow(*task).development_area))
        .cloned()
        .collect()
}

/// Whether the child-scoped completion log contains the task at least once
pub fn is_completed(completions: &[Completion], task_id: &str) -> bool {
    completions.iter().any(|completion| completion.task_id == task_id)
}

/// How many times the task appears in the child-scoped completion log
pub fn completion_count(completions: &[Completion], task_id: &str) -> usize {
    completions
        .iter()
        .filter(|completion| completion.task_id == task_id)
        .count()
}

/// Per-area totals over the (already age-filtered) tasks, in the fixed
/// area order. A task repeated many times still counts once.
pub fn area_progress<T>(tasks: &[T], completions: &[Completion]) -> Vec<AreaProgress>
where
    T: Borrow<LearningTask>,
{
    DevelopmentArea::ALL
        .into_iter()
        .map(|area| {
            let area_tasks = tasks
                .iter()
                .map(|task| task.borrow())
                .filter(|task| task.development_area == area);

            let (total, completed) = area_tasks.fold((0, 0), |(total, completed), task| {
                let done = is_completed(completions, &task.id) as usize;
                (total + 1, completed + done)
            });

            AreaProgress { area, total, completed }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::{TimeZone, Utc};
    use shared::DevelopmentArea;

    use crate::domain::models::{Child, Completion, LearningTask};

    pub fn child(id: &str, age: u8) -> Child {
        Child {
            id: id.to_string(),
            name: format!("Child {}", id),
            age,
            avatar_color: "#3B82F6".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    pub fn task(id: &str, title: &str, min_age: u8, max_age: u8, area: DevelopmentArea) -> LearningTask {
        LearningTask {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("Do {}", title),
            min_age,
            max_age,
            time_estimate: 10,
            development_area: area,
            reward_message: format!("Great job on {}!", title),
            icon: "Puzzle".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        }
    }

    pub fn completion(id: &str, child_id: &str, task_id: &str) -> Completion {
        Completion {
            id: id.to_string(),
            child_id: child_id.to_string(),
            task_id: task_id.to_string(),
            completed_at: Utc.with_ymd_and_hms(2024, 2, 1, 17, 30, 0).unwrap(),
            notes: None,
        }
    }
}
