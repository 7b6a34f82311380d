use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Query value that selects every developmental area
pub const ALL_AREAS: &str = "all";

/// Developmental area a learning task focuses on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentArea {
    Cognitive,
    Motor,
    Social,
    Creative,
    Language,
}

impl DevelopmentArea {
    /// Every area in display order. Progress summaries follow this order.
    pub const ALL: [DevelopmentArea; 5] = [
        DevelopmentArea::Cognitive,
        DevelopmentArea::Motor,
        DevelopmentArea::Social,
        DevelopmentArea::Creative,
        DevelopmentArea::Language,
    ];

    /// Wire name of the area
    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentArea::Cognitive => "cognitive",
            DevelopmentArea::Motor => "motor",
            DevelopmentArea::Social => "social",
            DevelopmentArea::Creative => "creative",
            DevelopmentArea::Language => "language",
        }
    }

    /// Human-readable label shown on area tabs and progress tiles
    pub fn label(&self) -> &'static str {
        match self {
            DevelopmentArea::Cognitive => "Cognitive",
            DevelopmentArea::Motor => "Physical",
            DevelopmentArea::Social => "Social",
            DevelopmentArea::Creative => "Creative",
            DevelopmentArea::Language => "Language",
        }
    }
}

impl fmt::Display for DevelopmentArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DevelopmentArea {
    type Err = UnknownAreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DevelopmentArea::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| UnknownAreaError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownAreaError(pub String);

impl fmt::Display for UnknownAreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown development area: {}", self.0)
    }
}

impl std::error::Error for UnknownAreaError {}

/// Represents a child profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub avatar_color: String,
    pub created_at: String, // RFC 3339 timestamp
}

/// Request for registering a new child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateChildRequest {
    pub name: String,
    /// Validated against 0-18 by the backend
    pub age: i64,
    /// Picked from the avatar palette when omitted
    #[serde(default)]
    pub avatar_color: Option<String>,
}

/// Response after registering a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Response containing a list of children, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

/// A learning activity from the task catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub min_age: u8,
    pub max_age: u8,
    /// Estimated duration in minutes
    pub time_estimate: u32,
    pub development_area: DevelopmentArea,
    /// Message shown to the child after completing the task
    pub reward_message: String,
    /// Symbolic icon name, resolved by the presentation layer
    pub icon: String,
    pub created_at: String, // RFC 3339 timestamp
}

/// A task definition submitted for catalog ingestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLearningTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub min_age: i64,
    pub max_age: i64,
    pub time_estimate: i64,
    pub development_area: DevelopmentArea,
    #[serde(default)]
    pub reward_message: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Request for importing task definitions into the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportTasksRequest {
    pub tasks: Vec<NewLearningTask>,
}

/// Response after a catalog import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportTasksResponse {
    pub tasks: Vec<LearningTask>,
    pub success_message: String,
}

/// Response containing catalog tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<LearningTask>,
}

/// A single completion of a task by a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub id: String,
    pub child_id: String,
    pub task_id: String,
    pub completed_at: String, // RFC 3339 timestamp
    pub notes: Option<String>,
}

/// Request for marking a task complete for a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteTaskRequest {
    pub task_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response after a completion has been recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteTaskResponse {
    pub completion: Completion,
    pub reward_message: String,
    /// How long the reward message stays on screen
    pub reward_display_ms: u64,
    /// Completions of this task by this child, including this one
    pub completion_count: usize,
}

/// Response containing a child's completion log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionListResponse {
    pub completions: Vec<Completion>,
}

/// Completed versus total eligible tasks for one area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaProgress {
    pub area: DevelopmentArea,
    pub label: String,
    pub total: usize,
    pub completed: usize,
}

/// Response containing the per-area progress summary of a child
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub child_id: String,
    pub areas: Vec<AreaProgress>,
}

/// A task as displayed on a child's board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCard {
    pub task: LearningTask,
    /// Resolved icon name; unknown icons fall back to the default
    pub icon: String,
    pub completion_count: usize,
    pub is_completed: bool,
}

/// Everything the presentation layer needs to render a child's tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskBoardResponse {
    pub child: Child,
    pub selected_area: String,
    pub selected_area_label: String,
    pub tasks: Vec<TaskCard>,
    pub progress: Vec<AreaProgress>,
}

impl Child {
    /// Generate a unique child ID
    pub fn generate_id() -> String {
        format!("child::{}", Uuid::new_v4())
    }
}

impl LearningTask {
    /// Generate a unique task ID
    pub fn generate_id() -> String {
        format!("task::{}", Uuid::new_v4())
    }
}

impl Completion {
    /// Generate a unique completion ID
    pub fn generate_id() -> String {
        format!("completion::{}", Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_area_round_trips_through_str() {
        for area in DevelopmentArea::ALL {
            assert_eq!(area.as_str().parse::<DevelopmentArea>(), Ok(area));
        }
    }

    #[test]
    fn test_development_area_rejects_unknown_names() {
        assert!("nonexistent-area".parse::<DevelopmentArea>().is_err());
        assert!("Cognitive".parse::<DevelopmentArea>().is_err());
        assert!(ALL_AREAS.parse::<DevelopmentArea>().is_err());
    }

    #[test]
    fn test_development_area_serializes_lowercase() {
        let json = serde_json::to_string(&DevelopmentArea::Motor).unwrap();
        assert_eq!(json, "\"motor\"");

        let area: DevelopmentArea = serde_json::from_str("\"language\"").unwrap();
        assert_eq!(area, DevelopmentArea::Language);
    }

    #[test]
    fn test_motor_is_labelled_physical() {
        assert_eq!(DevelopmentArea::Motor.label(), "Physical");
    }

    #[test]
    fn test_generate_ids_are_prefixed_and_unique() {
        let first = Completion::generate_id();
        let second = Completion::generate_id();

        assert!(first.starts_with("completion::"));
        assert_ne!(first, second);
        assert!(Child::generate_id().starts_with("child::"));
        assert!(LearningTask::generate_id().starts_with("task::"));
    }

    #[test]
    fn test_create_child_request_color_is_optional() {
        let request: CreateChildRequest =
            serde_json::from_str(r#"{"name":"Mia","age":5}"#).unwrap();
        assert_eq!(request.avatar_color, None);
        assert_eq!(request.age, 5);
    }
}
