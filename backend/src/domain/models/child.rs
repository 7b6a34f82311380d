use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::TrackerError;

/// Youngest age a child profile may have
pub const MIN_CHILD_AGE: u8 = 0;
/// Oldest age a child profile may have
pub const MAX_CHILD_AGE: u8 = 18;

/// Domain model representing a registered child.
/// Profiles are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub avatar_color: String,
    pub created_at: DateTime<Utc>,
}

impl Child {
    /// Check an untrusted age value and narrow it to the stored representation
    pub fn validate_age(age: i64) -> Result<u8, TrackerError> {
        if age < MIN_CHILD_AGE as i64 || age > MAX_CHILD_AGE as i64 {
            return Err(TrackerError::AgeOutOfRange(age));
        }
        Ok(age as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_age_bounds() {
        assert_eq!(Child::validate_age(0).unwrap(), 0);
        assert_eq!(Child::validate_age(18).unwrap(), 18);
        assert!(matches!(Child::validate_age(-1), Err(TrackerError::AgeOutOfRange(-1))));
        assert!(matches!(Child::validate_age(19), Err(TrackerError::AgeOutOfRange(19))));
    }
}
