//! Caller-held view state for the selected child.
//!
//! The board owns the child, the tasks eligible for them, their completion
//! log, the selected area and the transient reward banner. Views are
//! recomputed through the progress engine on every call, never cached.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::icons::TaskIcon;
use super::models::{AreaFilter, Child, Completion, LearningTask};
use super::progress_engine::{self, AreaProgress};

/// How long a reward message stays visible after a completion
pub const REWARD_DISPLAY_DURATION: Duration = Duration::from_millis(4000);

/// Reward message shown after a confirmed completion
#[derive(Debug, Clone, PartialEq)]
pub struct RewardBanner {
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl RewardBanner {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.shown_at);
        elapsed.num_milliseconds() < REWARD_DISPLAY_DURATION.as_millis() as i64
    }
}

/// A task together with the child's completion state for it
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCardView<'a> {
    pub task: &'a LearningTask,
    pub icon: TaskIcon,
    pub completion_count: usize,
    pub is_completed: bool,
}

#[derive(Debug, Clone)]
pub struct TaskBoard {
    child: Child,
    tasks: Vec<LearningTask>,
    completions: Vec<Completion>,
    selected_area: AreaFilter,
    reward: Option<RewardBanner>,
}

impl TaskBoard {
    /// Build a board from a catalog and a completion log.
    ///
    /// Only tasks eligible for the child are kept, and completions belonging
    /// to any other child are dropped so that completion state cannot leak
    /// between children.
    pub fn new(child: Child, catalog: &[LearningTask], completions: Vec<Completion>) -> Self {
        let tasks: Vec<LearningTask> = progress_engine::eligible_tasks(catalog, &child)
            .into_iter()
            .cloned()
            .collect();

        let total = completions.len();
        let completions: Vec<Completion> = completions
            .into_iter()
            .filter(|completion| completion.child_id == child.id)
            .collect();
        if completions.len() != total {
            warn!(
                "Dropped {} completions not belonging to child {}",
                total - completions.len(),
                child.id
            );
        }

        debug!(
            "Built task board for child {}: {} eligible tasks, {} completions",
            child.id,
            tasks.len(),
            completions.len()
        );

        Self {
            child,
            tasks,
            completions,
            selected_area: AreaFilter::All,
            reward: None,
        }
    }

    pub fn child(&self) -> &Child {
        &self.child
    }

    /// Eligible tasks, ordered by title
    pub fn tasks(&self) -> &[LearningTask] {
        &self.tasks
    }

    /// The child's completion log
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    pub fn selected_area(&self) -> &AreaFilter {
        &self.selected_area
    }

    pub fn select_area(&mut self, area: AreaFilter) {
        self.selected_area = area;
    }

    /// Cards for the tasks in the selected area
    pub fn cards(&self) -> Vec<TaskCardView<'_>> {
        progress_engine::filter_by_area(&self.tasks.iter().collect::<Vec<_>>(), &self.selected_area)
            .into_iter()
            .map(|task| TaskCardView {
                task,
                icon: TaskIcon::resolve(&task.icon),
                completion_count: progress_engine::completion_count(&self.completions, &task.id),
                is_completed: progress_engine::is_completed(&self.completions, &task.id),
            })
            .collect()
    }

    /// Progress over every eligible task, independent of the selected area
    pub fn progress(&self) -> Vec<AreaProgress> {
        progress_engine::area_progress(&self.tasks, &self.completions)
    }

    pub fn completion_count(&self, task_id: &str) -> usize {
        progress_engine::completion_count(&self.completions, task_id)
    }

    /// Merge a completion confirmed by storage and raise its reward banner.
    ///
    /// Only call this after the write has succeeded. A completion for a
    /// different child is ignored and `false` is returned.
    pub fn apply_completion(
        &mut self,
        completion: Completion,
        reward_message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> bool {
        if completion.child_id != self.child.id {
            warn!(
                "Ignoring completion {} for child {} on board of child {}",
                completion.id, completion.child_id, self.child.id
            );
            return false;
        }

        self.completions.push(completion);
        self.reward = Some(RewardBanner {
            message: reward_message.into(),
            shown_at: now,
        });
        true
    }

    /// The reward message, while it is inside its display window
    pub fn reward_message(&self, now: DateTime<Utc>) -> Option<&str> {
        self.reward
            .as_ref()
            .filter(|banner| banner.is_visible(now))
            .map(|banner| banner.message.as_str())
    }

    pub fn clear_expired_reward(&mut self, now: DateTime<Utc>) {
        if self.reward.as_ref().is_some_and(|banner| !banner.is_visible(now)) {
            self.reward = None;
        }
    }
}
