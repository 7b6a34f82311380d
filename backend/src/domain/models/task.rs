use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::DevelopmentArea;

/// Domain model for a catalog task. Reference data: the engine never edits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub min_age: u8,
    pub max_age: u8,
    /// Minutes
    pub time_estimate: u32,
    pub development_area: DevelopmentArea,
    pub reward_message: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl LearningTask {
    /// A task is eligible when its age range contains the child's stored age
    pub fn is_eligible_for(&self, age: u8) -> bool {
        self.min_age <= age && age <= self.max_age
    }
}
