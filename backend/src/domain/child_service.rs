use chrono::{SubsecRound, Utc};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::child::CreateChildCommand;
use super::errors::{TrackerError, MAX_CHILD_NAME_LEN};
use super::models::Child;
use crate::storage::ChildStorage;

/// Avatar colors handed out to children registered without one
pub const AVATAR_COLORS: [&str; 6] = ["#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#EC4899"];

/// Service for registering and looking up child profiles
#[derive(Clone)]
pub struct ChildService {
    storage: Arc<dyn ChildStorage>,
}

impl ChildService {
    pub fn new(storage: Arc<dyn ChildStorage>) -> Self {
        Self { storage }
    }

    /// Register a new child
    pub async fn create_child(&self, command: CreateChildCommand) -> Result<Child, TrackerError> {
        info!("Creating child: name={}, age={}", command.name, command.age);

        let name = Self::validate_name(&command.name)?;
        let age = Child::validate_age(command.age)?;

        let avatar_color = match command.avatar_color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => color.to_string(),
            _ => Self::pick_avatar_color(),
        };

        let child = Child {
            id: shared::Child::generate_id(),
            name,
            age,
            avatar_color,
            // Storage keeps microseconds
            created_at: Utc::now().trunc_subsecs(6),
        };

        self.storage.store_child(&child).await?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// Get a child by ID
    pub async fn get_child(&self, child_id: &str) -> Result<Option<Child>, TrackerError> {
        info!("Getting child: {}", child_id);

        let child = self.storage.get_child(child_id).await?;
        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }

        Ok(child)
    }

    /// Get a child by ID, treating absence as an error
    pub async fn require_child(&self, child_id: &str) -> Result<Child, TrackerError> {
        self.get_child(child_id)
            .await?
            .ok_or_else(|| TrackerError::ChildNotFound(child_id.to_string()))
    }

    /// List all children, newest first
    pub async fn list_children(&self) -> Result<Vec<Child>, TrackerError> {
        info!("Listing all children");

        let children = self.storage.list_children().await?;

        info!("Found {} children", children.len());
        Ok(children)
    }

    fn validate_name(name: &str) -> Result<String, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyChildName);
        }
        if name.chars().count() > MAX_CHILD_NAME_LEN {
            return Err(TrackerError::ChildNameTooLong);
        }
        Ok(name.to_string())
    }

    fn pick_avatar_color() -> String {
        AVATAR_COLORS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(AVATAR_COLORS[0])
            .to_string()
    }
}
